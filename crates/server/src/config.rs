//! Server configuration

const DEFAULT_RATE_LIMIT_RPS: u32 = 50;

/// Server configuration loaded from environment variables
pub struct Config {
    pub bind_address: String,
    pub ollama_url: String,
    pub ollama_model: String,
    pub ollama_timeout_secs: u64,
    pub cors_origins: Vec<String>,
    pub rate_limit_rps: u32,
    /// Directory holding the built form UI, served for unmatched paths
    pub static_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            bind_address: std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:3001".into()),
            ollama_url: std::env::var("OLLAMA_URL")
                .unwrap_or_else(|_| "http://localhost:11434".into()),
            ollama_model: std::env::var("OLLAMA_MODEL").unwrap_or_else(|_| "llama3.2:3b".into()),
            ollama_timeout_secs: std::env::var("OLLAMA_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
            cors_origins: parse_origins(
                &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
            ),
            rate_limit_rps: parse_rate_limit(std::env::var("RATE_LIMIT_RPS").ok().as_deref()),
            static_dir: std::env::var("STATIC_DIR").ok().filter(|d| !d.is_empty()),
        }
    }
}

/// Split a comma-separated origin list, dropping blanks
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect()
}

/// Zero or unparsable values fall back to the default
fn parse_rate_limit(raw: Option<&str>) -> u32 {
    raw.and_then(|v| v.trim().parse().ok())
        .filter(|&rps| rps > 0)
        .unwrap_or(DEFAULT_RATE_LIMIT_RPS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_are_trimmed_and_blanks_dropped() {
        assert_eq!(
            parse_origins(" http://localhost:5173 , ,https://kisim.example"),
            vec!["http://localhost:5173", "https://kisim.example"]
        );
        assert_eq!(parse_origins("*"), vec!["*"]);
        assert!(parse_origins("").is_empty());
    }

    #[test]
    fn rate_limit_falls_back_on_bad_input() {
        assert_eq!(parse_rate_limit(Some("10")), 10);
        assert_eq!(parse_rate_limit(Some("0")), DEFAULT_RATE_LIMIT_RPS);
        assert_eq!(parse_rate_limit(Some("fast")), DEFAULT_RATE_LIMIT_RPS);
        assert_eq!(parse_rate_limit(None), DEFAULT_RATE_LIMIT_RPS);
    }
}
