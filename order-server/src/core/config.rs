use rust_decimal::Decimal;
use std::str::FromStr;

use crate::orders::money::ChargeRates;
use crate::utils::AppError;

/// 服务器配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (none) | 日志目录, 设置后按天滚动写入文件 |
/// | HEARTBEAT_INTERVAL_SECS | 20 | 心跳任务间隔(秒) |
/// | TAX_RATE | 0.10 | 税率 |
/// | SERVICE_CHARGE_RATE | 0.125 | 服务费率 |
/// | SEED_DEMO_DATA | true | 启动时载入演示订单 |
/// | MAX_CONNECTIONS | 256 | 最大并发请求数 |
///
/// # 示例
///
/// ```ignore
/// HTTP_PORT=8080 SEED_DEMO_DATA=false cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    /// 心跳间隔 (秒)
    pub heartbeat_interval_secs: u64,
    pub tax_rate: Decimal,
    pub service_charge_rate: Decimal,
    /// 是否载入演示数据
    pub seed_demo_data: bool,
    /// 最大并发请求数
    pub max_connections: usize,
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        let defaults = ChargeRates::default();
        Self {
            http_port: env_or("HTTP_PORT", 3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            heartbeat_interval_secs: env_or("HEARTBEAT_INTERVAL_SECS", 20),
            tax_rate: env_or("TAX_RATE", defaults.tax_rate),
            service_charge_rate: env_or("SERVICE_CHARGE_RATE", defaults.service_charge_rate),
            seed_demo_data: env_or("SEED_DEMO_DATA", true),
            max_connections: env_or("MAX_CONNECTIONS", 256),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(http_port: u16, seed_demo_data: bool) -> Self {
        let mut config = Self::from_env();
        config.http_port = http_port;
        config.seed_demo_data = seed_demo_data;
        config
    }

    /// 检查配置是否可用
    pub fn validate(&self) -> Result<(), AppError> {
        for (name, rate) in [
            ("TAX_RATE", self.tax_rate),
            ("SERVICE_CHARGE_RATE", self.service_charge_rate),
        ] {
            if rate.is_sign_negative() || rate > Decimal::ONE {
                return Err(AppError::config(format!(
                    "{name} must be between 0 and 1, got {rate}"
                )));
            }
        }
        if self.heartbeat_interval_secs == 0 {
            return Err(AppError::config("HEARTBEAT_INTERVAL_SECS must be positive"));
        }
        if self.max_connections == 0 {
            return Err(AppError::config("MAX_CONNECTIONS must be positive"));
        }
        Ok(())
    }

    /// 订单金额计算使用的费率
    pub fn charge_rates(&self) -> ChargeRates {
        ChargeRates {
            tax_rate: self.tax_rate,
            service_charge_rate: self.service_charge_rate,
        }
    }

    pub fn heartbeat_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.heartbeat_interval_secs)
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
