use super::entities::UserRole;

// 创建用户（存储层使用，password 为已哈希的值）
#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
    pub email_verified: bool,
    pub is_active: bool,
}
