use std::sync::Arc;

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

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: &str) -> Result<Option<User>>;
    // 通过邮箱获取用户信息（区分大小写）
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 用户总数
    async fn count_users(&self) -> Result<u64>;

    /// 学习活动方法
    async fn create_activity(
        &self,
        created_by: &str,
        activity: CreateActivityRequest,
    ) -> Result<Activity>;
    async fn get_activity_by_id(&self, id: &str) -> Result<Option<Activity>>;
    async fn list_activities_with_pagination(
        &self,
        params: ActivityListParams,
    ) -> Result<PaginatedResponse<Activity>>;

    /// 学习模块方法
    // 创建模块并按顺序关联活动
    async fn create_module(&self, created_by: &str, module: CreateModuleRequest)
    -> Result<Module>;
    // 获取模块及其有序活动
    async fn get_module_detail(&self, id: &str) -> Result<Option<ModuleDetail>>;
    async fn list_modules_with_pagination(
        &self,
        query: PaginationQuery,
    ) -> Result<PaginatedResponse<Module>>;

    /// 评分量规方法
    async fn create_rubric(&self, created_by: &str, rubric: CreateRubricRequest)
    -> Result<Rubric>;
    async fn get_rubric_by_id(&self, id: &str) -> Result<Option<Rubric>>;
    async fn list_rubrics_with_pagination(
        &self,
        params: RubricListParams,
    ) -> Result<PaginatedResponse<Rubric>>;

    /// 作业方法
    async fn create_assignment(
        &self,
        created_by: &str,
        assignment: CreateAssignmentRequest,
    ) -> Result<Assignment>;
    async fn get_assignment_by_id(&self, id: &str) -> Result<Option<Assignment>>;
    async fn list_assignments_with_pagination(
        &self,
        params: AssignmentListParams,
    ) -> Result<PaginatedResponse<Assignment>>;

    /// 提交方法
    // 有 submission_id 时更新该行，否则插入新行
    async fn upsert_submission(&self, submission: SubmissionUpsert) -> Result<Submission>;
    async fn get_submission_by_id(&self, id: &str) -> Result<Option<Submission>>;
    // 学生在某作业下的最新提交（版本最高，其次最近更新）
    async fn get_latest_submission(
        &self,
        assignment_id: &str,
        student_id: &str,
    ) -> Result<Option<Submission>>;
    async fn list_submissions_by_assignment(
        &self,
        assignment_id: &str,
        query: PaginationQuery,
    ) -> Result<PaginatedResponse<SubmissionListItem>>;

    /// 评价方法
    // 每个提交至多一条评价
    async fn upsert_evaluation(&self, evaluation: EvaluationUpsert) -> Result<Evaluation>;
    async fn get_evaluation_by_submission_id(
        &self,
        submission_id: &str,
    ) -> Result<Option<Evaluation>>;
}

/// 创建存储实例（自动根据 URL 推断数据库类型）
pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
