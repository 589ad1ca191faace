//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.
//! Se lee antes de inicializar el logging, por eso los valores inválidos se
//! acumulan como avisos y se emiten después con `log_config_warnings`.

use std::env;
use std::str::FromStr;

use tracing::warn;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub cors_origins: Vec<String>,
    pub log_level: tracing::Level,
    pub seed_on_startup: bool,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 3000,
            host: "0.0.0.0".to_string(),
            cors_origins: Vec::new(),
            log_level: tracing::Level::INFO,
            seed_on_startup: true,
        }
    }
}

/// Leer una variable y parsearla, volviendo al valor por defecto si falta o es inválida
fn parse_var<T: FromStr>(name: &str, default: T, warnings: &mut Vec<String>) -> T {
    match env::var(name) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warnings.push(format!(
                "Valor inválido para {}: '{}', usando el valor por defecto",
                name, raw
            ));
            default
        }),
        Err(_) => default,
    }
}

/// Separar una lista de orígenes separados por comas
fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Emitir los avisos acumulados al leer la configuración
pub fn log_config_warnings(warnings: &[String]) {
    for warning in warnings {
        warn!("⚠️ {}", warning);
    }
}

impl EnvironmentConfig {
    /// Leer la configuración desde las variables de entorno.
    ///
    /// Devuelve también los avisos por valores inválidos.
    pub fn from_env() -> (Self, Vec<String>) {
        let defaults = Self::default();
        let mut warnings = Vec::new();

        let config = Self {
            environment: env::var("ENVIRONMENT").unwrap_or(defaults.environment),
            port: parse_var("PORT", defaults.port, &mut warnings),
            host: env::var("HOST").unwrap_or(defaults.host),
            cors_origins: env::var("CORS_ORIGINS")
                .map(|raw| split_origins(&raw))
                .unwrap_or_default(),
            log_level: parse_var("LOG_LEVEL", defaults.log_level, &mut warnings),
            seed_on_startup: parse_var("SEED_ON_STARTUP", defaults.seed_on_startup, &mut warnings),
        };

        (config, warnings)
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la dirección del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    /// Writer que guarda la salida del subscriber en memoria
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().expect("log buffer").extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().expect("log buffer").clone()).expect("utf8 logs")
        }
    }

    #[test]
    fn test_defaults() {
        let config = EnvironmentConfig::default();
        assert_eq!(config.environment, "development");
        assert!(!config.is_production());
        assert!(config.seed_on_startup);
        assert_eq!(config.server_url(), "0.0.0.0:3000");
    }

    #[test]
    fn test_split_origins_skips_blanks() {
        let origins = split_origins("http://localhost:5173, ,https://example.com ");
        assert_eq!(origins, vec!["http://localhost:5173", "https://example.com"]);
    }

    #[test]
    fn test_parse_var_falls_back_on_garbage() {
        let mut warnings = Vec::new();

        env::set_var("VEHICLE_REGISTRY_TEST_PORT", "not-a-port");
        assert_eq!(parse_var("VEHICLE_REGISTRY_TEST_PORT", 3000u16, &mut warnings), 3000);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("VEHICLE_REGISTRY_TEST_PORT"));
        assert!(warnings[0].contains("not-a-port"));

        env::set_var("VEHICLE_REGISTRY_TEST_PORT", "8081");
        assert_eq!(parse_var("VEHICLE_REGISTRY_TEST_PORT", 3000u16, &mut warnings), 8081);
        assert_eq!(warnings.len(), 1);
        env::remove_var("VEHICLE_REGISTRY_TEST_PORT");
    }

    #[test]
    fn test_missing_var_is_not_a_warning() {
        let mut warnings = Vec::new();
        assert!(parse_var("VEHICLE_REGISTRY_TEST_UNSET", true, &mut warnings));
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_invalid_values_reach_the_log() {
        let mut warnings = Vec::new();
        env::set_var("VEHICLE_REGISTRY_TEST_SEED", "maybe");
        let seed = parse_var("VEHICLE_REGISTRY_TEST_SEED", true, &mut warnings);
        env::remove_var("VEHICLE_REGISTRY_TEST_SEED");
        assert!(seed);

        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_max_level(tracing::Level::WARN)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || log_config_warnings(&warnings));

        let output = logs.contents();
        assert!(output.contains("WARN"));
        assert!(output.contains("VEHICLE_REGISTRY_TEST_SEED"));
        assert!(output.contains("'maybe'"));
    }
}
