/// Server configuration read from the environment (with `.env` support).
pub struct Config {
    pub listen_addr: String,
    pub db_path: String,
    pub static_dir: String,
    pub cors_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let listen_addr =
            std::env::var("RH_LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let db_path = std::env::var("RH_DB_PATH").unwrap_or_else(|_| "data/ratehub.db".to_string());
        let static_dir = std::env::var("RH_STATIC_DIR").unwrap_or_else(|_| "static".to_string());
        let cors_origins = std::env::var("RH_CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost".to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        Config {
            listen_addr,
            db_path,
            static_dir,
            cors_origins,
        }
    }
}
