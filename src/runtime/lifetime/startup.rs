use crate::cache::{
    ObjectCache,
    register::{get_object_cache_plugin, registered_object_cache_plugins},
};
use crate::config::AppConfig;
use crate::errors::{PortalError, Result};
use crate::models::students::requests::CreateStudentRequest;
use crate::services::{forecast::InsightGenerator, quizzes::QuizSessionRegistry};
use crate::storage::Storage;
use crate::utils::password::hash_password;
use crate::utils::validate::validate_password;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub cache: Arc<dyn ObjectCache>,
    pub quiz_sessions: Arc<QuizSessionRegistry>,
    pub insight: Arc<InsightGenerator>,
}

/// 按名称构造缓存后端
async fn build_cache(name: &str) -> Result<Arc<dyn ObjectCache>> {
    let constructor = get_object_cache_plugin(name).ok_or_else(|| {
        PortalError::cache_plugin_not_found(format!("缓存后端 '{name}' 未注册"))
    })?;
    let cache = constructor().await?;
    Ok(Arc::from(cache))
}

/// 创建缓存实例，配置的后端不可用时回退到 moka
async fn create_cache() -> Result<Arc<dyn ObjectCache>> {
    let cache_type = &AppConfig::get().cache.cache_type;
    warn!("Attempting to create {} cache backend", cache_type);

    match build_cache(cache_type).await {
        Ok(cache) => {
            warn!("Successfully created {} cache backend", cache_type);
            Ok(cache)
        }
        Err(e) if cache_type != "moka" => {
            warn!("Failed to create {} cache: {}", cache_type, e);
            warn!("Falling back to memory cache");
            build_cache("moka").await
        }
        Err(e) => Err(e),
    }
}

/// 演示模式下确保演示学生存在
async fn seed_demo_student(storage: &Arc<dyn Storage>) {
    let auth = &AppConfig::get().auth;
    if !auth.demo_mode {
        return;
    }

    match storage.get_student_by_reg_no(&auth.demo_reg_no).await {
        Ok(Some(_)) => {
            debug!("Demo student {} already exists", auth.demo_reg_no);
            return;
        }
        Ok(None) => info!("Creating demo student {}", auth.demo_reg_no),
        Err(e) => {
            warn!("Failed to look up demo student: {}, skipping seed", e);
            return;
        }
    }

    let check = validate_password(&auth.demo_password);
    if !check.is_valid {
        warn!("Demo password is weak: {}", check.error_message());
    }

    let password_hash = match hash_password(&auth.demo_password) {
        Ok(hash) => hash,
        Err(e) => {
            warn!("Failed to hash demo password: {}, skipping seed", e);
            return;
        }
    };

    let request = CreateStudentRequest {
        reg_no: auth.demo_reg_no.clone(),
        name: auth.demo_name.clone(),
        email: format!("{}@demo.local", auth.demo_reg_no),
        password_hash,
        degree: None,
        batch: None,
        section: None,
        cgpa: 0.0,
        earned_credits: 0,
        arrears: 0,
    };

    match storage.create_student(request).await {
        Ok(student) => info!(
            "Demo student created (ID: {}, reg_no: {})",
            student.id, student.reg_no
        ),
        Err(e) => warn!("Failed to create demo student: {}", e),
    }
}

/// 准备服务器启动的上下文
/// 包括存储、缓存、测验会话表和文本生成服务
pub async fn prepare_server_startup() -> Result<StartupContext> {
    // 其他组件可能已安装过 provider
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        debug!("rustls crypto provider already installed");
    }

    if cfg!(debug_assertions) {
        debug!(
            "Registered cache backends: {:?}",
            registered_object_cache_plugins()
        );
    }

    let config = AppConfig::get();

    let storage = crate::storage::create_storage().await?;
    warn!("Storage backend initialized and migrations completed");

    seed_demo_student(&storage).await;

    let cache = create_cache().await?;
    warn!("Cache backend initialized");

    let quiz_sessions =
        QuizSessionRegistry::with_storage(storage.clone(), config.quiz.max_active_sessions);

    let insight = Arc::new(InsightGenerator::from_config(&config.ai));
    match insight.provider() {
        Some(provider) => warn!("Insight provider: {}", provider),
        None => warn!("No insight provider configured, using fallback text"),
    }

    Ok(StartupContext {
        storage,
        cache,
        quiz_sessions,
        insight,
    })
}
