//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod activities;
mod assignments;
mod evaluations;
mod modules;
mod rubrics;
mod submissions;
mod users;

use crate::config::AppConfig;
use crate::errors::{HotsError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        let storage = Self::with_connection(db).await?;
        info!("SeaORM storage initialized, database: {}", db_url);

        Ok(storage)
    }

    /// 基于已有连接创建存储实例并运行迁移
    pub async fn with_connection(db: DatabaseConnection) -> Result<Self> {
        Migrator::up(&db, None)
            .await
            .map_err(|e| HotsError::database_operation(format!("Migration failed: {e}")))?;

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| HotsError::database_config(format!("Invalid SQLite URL: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| HotsError::database_connection(format!("SQLite connection failed: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| HotsError::database_connection(format!("Unable to connect to database: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(HotsError::database_config(format!(
                "Cannot infer database type from URL: {url}. Supported: sqlite://, postgres://, mysql://, or a .db/.sqlite file path"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    PaginatedResponse, PaginationQuery,
    activities::{
        entities::Activity,
        requests::{ActivityListParams, CreateActivityRequest},
    },
    assignments::{
        entities::Assignment,
        requests::{AssignmentListParams, CreateAssignmentRequest},
    },
    evaluations::{entities::Evaluation, requests::EvaluationUpsert},
    modules::{entities::Module, requests::CreateModuleRequest, responses::ModuleDetail},
    rubrics::{
        entities::Rubric,
        requests::{CreateRubricRequest, RubricListParams},
    },
    submissions::{
        entities::Submission, requests::SubmissionUpsert, responses::SubmissionListItem,
    },
    users::{entities::User, requests::CreateUserRequest},
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: &str) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    // 活动模块
    async fn create_activity(
        &self,
        created_by: &str,
        activity: CreateActivityRequest,
    ) -> Result<Activity> {
        self.create_activity_impl(created_by, activity).await
    }

    async fn get_activity_by_id(&self, id: &str) -> Result<Option<Activity>> {
        self.get_activity_by_id_impl(id).await
    }

    async fn list_activities_with_pagination(
        &self,
        params: ActivityListParams,
    ) -> Result<PaginatedResponse<Activity>> {
        self.list_activities_with_pagination_impl(params).await
    }

    // 学习模块
    async fn create_module(
        &self,
        created_by: &str,
        module: CreateModuleRequest,
    ) -> Result<Module> {
        self.create_module_impl(created_by, module).await
    }

    async fn get_module_detail(&self, id: &str) -> Result<Option<ModuleDetail>> {
        self.get_module_detail_impl(id).await
    }

    async fn list_modules_with_pagination(
        &self,
        query: PaginationQuery,
    ) -> Result<PaginatedResponse<Module>> {
        self.list_modules_with_pagination_impl(query).await
    }

    // 量规模块
    async fn create_rubric(
        &self,
        created_by: &str,
        rubric: CreateRubricRequest,
    ) -> Result<Rubric> {
        self.create_rubric_impl(created_by, rubric).await
    }

    async fn get_rubric_by_id(&self, id: &str) -> Result<Option<Rubric>> {
        self.get_rubric_by_id_impl(id).await
    }

    async fn list_rubrics_with_pagination(
        &self,
        params: RubricListParams,
    ) -> Result<PaginatedResponse<Rubric>> {
        self.list_rubrics_with_pagination_impl(params).await
    }

    // 作业模块
    async fn create_assignment(
        &self,
        created_by: &str,
        assignment: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        self.create_assignment_impl(created_by, assignment).await
    }

    async fn get_assignment_by_id(&self, id: &str) -> Result<Option<Assignment>> {
        self.get_assignment_by_id_impl(id).await
    }

    async fn list_assignments_with_pagination(
        &self,
        params: AssignmentListParams,
    ) -> Result<PaginatedResponse<Assignment>> {
        self.list_assignments_with_pagination_impl(params).await
    }

    // 提交模块
    async fn upsert_submission(&self, submission: SubmissionUpsert) -> Result<Submission> {
        self.upsert_submission_impl(submission).await
    }

    async fn get_submission_by_id(&self, id: &str) -> Result<Option<Submission>> {
        self.get_submission_by_id_impl(id).await
    }

    async fn get_latest_submission(
        &self,
        assignment_id: &str,
        student_id: &str,
    ) -> Result<Option<Submission>> {
        self.get_latest_submission_impl(assignment_id, student_id)
            .await
    }

    async fn list_submissions_by_assignment(
        &self,
        assignment_id: &str,
        query: PaginationQuery,
    ) -> Result<PaginatedResponse<SubmissionListItem>> {
        self.list_submissions_by_assignment_impl(assignment_id, query)
            .await
    }

    // 评价模块
    async fn upsert_evaluation(&self, evaluation: EvaluationUpsert) -> Result<Evaluation> {
        self.upsert_evaluation_impl(evaluation).await
    }

    async fn get_evaluation_by_submission_id(
        &self,
        submission_id: &str,
    ) -> Result<Option<Evaluation>> {
        self.get_evaluation_by_submission_id_impl(submission_id)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_database_url() {
        assert_eq!(
            SeaOrmStorage::build_database_url("hots.db").unwrap(),
            "sqlite://hots.db?mode=rwc"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url("postgres://u:p@localhost/hots").unwrap(),
            "postgres://u:p@localhost/hots"
        );
        assert!(SeaOrmStorage::build_database_url("ftp://nowhere").is_err());
    }
}
