use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::i18n::Language;

/// 디바이스 설정을 표현한다. 언어는 코드 문자열로 저장해서 지원 언어 목록이
/// 다른 펌웨어가 쓴 파일도 로드가 깨지지 않는다. 모르는 코드는 조회 시
/// 영어로 폴백된다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub language: String,
    pub city: String,
    pub brightness: u8,
    pub use_fahrenheit: bool,
    pub use_24hr: bool,
    pub night_mode: bool,
    pub night_brightness: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: Language::default().as_code().to_string(),
            city: "London".to_string(),
            brightness: 80,
            use_fahrenheit: false,
            use_24hr: false,
            night_mode: false,
            night_brightness: 10,
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    let path = Path::new("config.toml");
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg)?;
        Ok(cfg)
    }
}

fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write("config.toml", content)?;
    Ok(())
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        save_config(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    #[test]
    fn toml_roundtrip_preserves_fields() {
        let cfg = Config {
            language: "tr".to_string(),
            city: "Ankara".to_string(),
            use_24hr: true,
            night_brightness: 3,
            ..Config::default()
        };

        let text = toml::to_string_pretty(&cfg).unwrap();
        let back: Config = toml::from_str(&text).unwrap();
        assert_eq!(back.language, "tr");
        assert_eq!(back.city, "Ankara");
        assert!(back.use_24hr);
        assert_eq!(back.night_brightness, 3);
    }

    #[test]
    fn default_language_is_english() {
        let cfg = Config::default();
        assert_eq!(Language::from_code(&cfg.language), Language::En);
    }

    #[test]
    fn stale_language_code_falls_back_to_english() {
        // 다운그레이드된 펌웨어가 모르는 코드를 만나는 경우
        let cfg = Config {
            language: "pt-BR".to_string(),
            ..Config::default()
        };
        assert_eq!(Language::from_code(&cfg.language), Language::En);
    }
}
