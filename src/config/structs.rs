use serde::{Deserialize, Serialize};

/// 应用配置结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    pub database: DatabaseConfig,
    pub cache: CacheConfig,
    pub cors: CorsConfig,
    pub argon2: Argon2Config,
    pub auth: AuthConfig,
    pub ai: AiConfig,
    #[serde(default)]
    pub forecast: ForecastConfig,
    #[serde(default)]
    pub quiz: QuizConfig,
}

/// 应用设置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub system_name: String,
    pub environment: String,
    pub log_level: String,
}

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub unix_socket_path: String,
    pub workers: usize,
    pub max_workers: usize,
    pub timeouts: TimeoutConfig,
    pub limits: LimitConfig,
}

/// 超时配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeoutConfig {
    pub client_request: u64,
    pub client_disconnect: u64,
    pub keep_alive: u64,
}

/// 限制配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitConfig {
    pub max_payload_size: usize,
}

/// JWT 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    #[serde(skip_serializing, default)] // 不序列化到JSON响应中
    pub secret: String,
    pub access_token_expiry: i64,
    pub refresh_token_expiry: i64,
    pub refresh_token_remember_me_expiry: i64,
}

/// 数据库配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,    // 数据库连接 URL（从 scheme 自动推断类型）
    pub pool_size: u32, // 连接池大小
    pub timeout: u64,   // 连接超时 (秒)
}

/// 缓存配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    #[serde(rename = "type")]
    pub cache_type: String,
    pub default_ttl: u64,
    pub redis: RedisConfig,
    pub memory: MemoryConfig,
}

/// Redis 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedisConfig {
    pub url: String,
    pub key_prefix: String,
    pub pool_size: u64,
}

/// 内存缓存配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryConfig {
    pub max_capacity: u64,
}

/// CORS 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub max_age: usize,
}

/// Argon2 密码哈希参数
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Argon2Config {
    pub memory_cost: u32,
    pub time_cost: u32,
    pub parallelism: u32,
}

/// 登录配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// 凭据均不匹配时回退到演示学生账号
    pub demo_mode: bool,
    pub demo_reg_no: String,
    pub demo_name: String,
    #[serde(skip_serializing, default)]
    pub demo_password: String,
}

/// 文本生成服务配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    /// gemini | openai
    pub provider: String,
    #[serde(skip_serializing, default)]
    pub api_key: String,
    pub model: String,
    /// 为空时使用各提供方的默认地址
    #[serde(default)]
    pub base_url: String,
    pub temperature: f64,
    pub max_tokens: usize,
    pub timeout_secs: u64,
}

/// 预测打分参数
///
/// 各项权重之和不要求为 1，最终结果会被截断到配置区间内。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    pub cgpa_weight: f64,
    pub attendance_weight: f64,
    pub engagement_weight: f64,
    pub quiz_weight: f64,
    /// 参与度达到满分所需的学习小时数
    pub engagement_hour_cap: f64,
    pub arrear_penalty: f64,
    pub attendance_threshold: f64,
    pub attendance_penalty: f64,
    pub quiz_threshold: f64,
    pub quiz_penalty: f64,
    pub cgpa_threshold: f64,
    pub cgpa_penalty: f64,
    pub improvement_cgpa_weight: f64,
    pub improvement_shortfall_weight: f64,
    pub score_min: i32,
    pub score_max: i32,
    pub improvement_max: i32,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            cgpa_weight: 0.40,
            attendance_weight: 0.30,
            engagement_weight: 0.20,
            quiz_weight: 0.10,
            engagement_hour_cap: 20.0,
            arrear_penalty: 12.0,
            attendance_threshold: 75.0,
            attendance_penalty: 35.0,
            quiz_threshold: 50.0,
            quiz_penalty: 20.0,
            cgpa_threshold: 7.0,
            cgpa_penalty: 15.0,
            improvement_cgpa_weight: 0.6,
            improvement_shortfall_weight: 0.4,
            score_min: 2,
            score_max: 98,
            improvement_max: 55,
        }
    }
}

/// 测验会话配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// 同时进行中的测验会话上限
    pub max_active_sessions: usize,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            max_active_sessions: 10_000,
        }
    }
}
