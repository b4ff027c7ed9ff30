pub mod external_server;
pub mod nba_server;
