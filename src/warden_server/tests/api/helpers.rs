use tokio::net::TcpListener;
use warden_adapters::{
    AllowedOrigins, Argon2PasswordHasher, HashMapUserStore, HashingSettings, config::test,
};
use warden_application::AuthService;
use warden_server::AuthServer;

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
}

impl TestApp {
    pub async fn new(allowed_origins: AllowedOrigins) -> Self {
        let listener = TcpListener::bind(test::APP_ADDRESS)
            .await
            .expect("Failed to bind test listener");
        let address = format!("http://{}", listener.local_addr().unwrap());

        let password_hasher = Argon2PasswordHasher::new(&HashingSettings::default())
            .expect("Failed to build password hasher");
        let auth_service = AuthService::new(HashMapUserStore::new(), password_hasher);

        tokio::spawn(AuthServer::new(auth_service).run_standalone(listener, allowed_origins));

        Self {
            address,
            http_client: reqwest::Client::new(),
        }
    }

    pub async fn get_index(&self) -> reqwest::Response {
        self.http_client
            .get(format!("{}/", &self.address))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_index_from(&self, origin: &str) -> reqwest::Response {
        self.http_client
            .get(format!("{}/", &self.address))
            .header("Origin", origin)
            .send()
            .await
            .expect("Failed to execute request")
    }
}
