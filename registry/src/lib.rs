use std::sync::Arc;

use adapter::database::ConnectionPool;
use adapter::repository::auth::AuthRepositoryImpl;
use adapter::repository::health::HealthCheckRepositoryImpl;
use adapter::repository::notification::NotificationRepositoryImpl;
use adapter::repository::task::TaskRepositoryImpl;
use adapter::repository::user::UserRepositoryImpl;
use kernel::repository::auth::AuthRepository;
use kernel::repository::health::HealthCheckRepository;
use kernel::repository::notification::NotificationRepository;
use kernel::repository::task::TaskRepository;
use kernel::repository::user::UserRepository;

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    user_repository: Arc<dyn UserRepository>,
    auth_repository: Arc<dyn AuthRepository>,
    task_repository: Arc<dyn TaskRepository>,
    notification_repository: Arc<dyn NotificationRepository>,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let user_repository = Arc::new(UserRepositoryImpl::new(pool.clone()));
        let auth_repository = Arc::new(AuthRepositoryImpl::new(pool.clone()));
        let task_repository = Arc::new(TaskRepositoryImpl::new(pool.clone()));
        let notification_repository = Arc::new(NotificationRepositoryImpl::new(pool.clone()));
        Self {
            health_check_repository,
            user_repository,
            auth_repository,
            task_repository,
            notification_repository,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }

    pub fn auth_repository(&self) -> Arc<dyn AuthRepository> {
        self.auth_repository.clone()
    }

    pub fn task_repository(&self) -> Arc<dyn TaskRepository> {
        self.task_repository.clone()
    }

    pub fn notification_repository(&self) -> Arc<dyn NotificationRepository> {
        self.notification_repository.clone()
    }
}
