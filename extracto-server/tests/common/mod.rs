#![allow(dead_code)]

use extracto_ingest::PlainTextExtractor;
use extracto_server::{Application, ServerConfig};
use std::sync::Arc;

pub const STATEMENT_ENERO: &str = "Detalle de Movimientos Realizados\n\
                                   15/JAN 16/JAN 001 PAGO SERVICIO 1,234.56\n\
                                   REF LINE WITH CLABE 12345678901234567890\n\
                                   Total de Movimientos\n";

pub const STATEMENT_FEBRERO: &str = "Detalle de Movimientos Realizados\n\
                                     02/FEB 02/FEB T17 SPEI ENVIADO 300.00\n\
                                     BNET01234567890123456789\n\
                                     03/FEB 03/FEB C02 COMPRA COMERCIO 45.10\n\
                                     Total de Movimientos\n";

pub struct TestApp {
    pub address: String,
    pub port: u16,
}

impl TestApp {
    /// Serve on a random port, reading uploads as form-feed separated text.
    pub async fn spawn() -> Self {
        Self::spawn_with(ServerConfig::default()).await
    }

    pub async fn spawn_with(mut config: ServerConfig) -> Self {
        config.port = 0;

        let app = Application::build(config, Arc::new(PlainTextExtractor))
            .await
            .expect("Failed to build test application");
        let port = app.port();

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        let address = format!("http://127.0.0.1:{}", port);

        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp { address, port }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }
}

pub fn file_part(name: &str, contents: &str) -> reqwest::multipart::Part {
    reqwest::multipart::Part::bytes(contents.as_bytes().to_vec())
        .file_name(name.to_string())
        .mime_str("application/pdf")
        .unwrap()
}
