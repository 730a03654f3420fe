//! # Service Registry - 싱글톤 의존성 주입 시스템
//!
//! 플랫팔 백엔드의 서비스/리포지토리 싱글톤을 관리하는 전역 DI 컨테이너입니다.
//! Spring Framework의 ApplicationContext와 BeanFactory 역할을 Rust에서 구현한 것으로,
//! 컴파일 타임 타입 안전성과 런타임 효율성을 모두 제공합니다.
//!
//! ## Spring Framework와의 비교
//!
//! | Spring 개념 | 이 시스템 | 비고 |
//! |-------------|-----------|------|
//! | `ApplicationContext` | `ServiceLocator` | 전역 DI 컨테이너 |
//! | `@Component` 스캔 | `inventory::submit!` | 컴파일 타임 수집 |
//! | `@Autowired` | `Arc<T>` 필드 + `T::instance()` | 생성자에서 의존성 해결 |
//! | `@Lazy` | 기본 동작 | 첫 접근 시 생성 |
//! | `@Scope("singleton")` | 기본 동작 | 타입당 인스턴스 하나 |
//! | `CircularDependencyException` | 런타임 패닉 | 더 빠른 실패 |
//!
//! ## 동작 방식
//!
//! ```text
//! 1. 컴파일 타임 (Component Scanning)
//!    ├─ 각 모듈의 inventory::submit! → Registration 생성
//!    └─ inventory::collect! → 전역 레지스트리에 등록
//!
//! 2. 런타임 초기화 (Infrastructure Beans)
//!    ├─ Database, RedisClient를 main에서 직접 생성
//!    └─ ServiceLocator::set() → 전역 컨테이너에 저장
//!
//! 3. 의존성 주입 (Autowiring)
//!    ├─ XxxService::instance() → ServiceLocator::get_or_init()
//!    ├─ 생성자 클로저 안에서 의존 컴포넌트의 instance() 호출
//!    └─ 캐싱 후 반환 → 이후 동일 타입 요청 시 캐시된 인스턴스 반환
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! impl MenuService {
//!     pub fn instance() -> Arc<Self> {
//!         ServiceLocator::get_or_init(|| MenuService {
//!             menu_repository: MenuRepository::instance(),
//!             notification_service: NotificationService::instance(),
//!         })
//!     }
//! }
//!
//! inventory::submit! {
//!     ServiceRegistration { name: "menu_service", construct: menu_service_construct }
//! }
//! ```

use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use crate::utils::display_terminal::{
    print_boxed_title, print_final_summary, print_step_complete, print_step_start, print_sub_task,
};

/// 비즈니스 로직 서비스를 위한 공통 인터페이스
///
/// 서비스의 기본 메타데이터와 생명주기 관리를 담당합니다.
/// `initialize_all()`이 부팅 시 모든 서비스의 `init()`을 호출합니다.
#[async_trait]
pub trait Service: Send + Sync {
    /// 레지스트리에서 서비스를 식별하는 고유 이름을 반환합니다.
    fn name(&self) -> &str;

    /// 서비스 초기화 로직을 수행합니다.
    ///
    /// 서비스가 처음 생성된 후 호출되며, 필요한 초기 설정이나
    /// 외부 연결 준비 작업을 수행할 수 있습니다.
    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// 데이터 액세스 리포지토리를 위한 공통 인터페이스
///
/// MongoDB 컬렉션과의 상호작용에 필요한 메타데이터를 관리합니다.
#[async_trait]
pub trait Repository: Send + Sync {
    /// 리포지토리의 고유 이름을 반환합니다.
    fn name(&self) -> &str;

    /// 연결된 MongoDB 컬렉션의 이름을 반환합니다.
    fn collection_name(&self) -> &str;

    /// 리포지토리 초기화 로직을 수행합니다.
    ///
    /// 인덱스 생성 등 데이터 액세스와 관련된 초기화 작업을 수행합니다.
    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// 서비스 등록 정보
///
/// 각 서비스 모듈이 `inventory::submit!`으로 제출하는 등록 메타데이터입니다.
/// 컴파일 타임에 수집되어 `initialize_all()`에서 일괄 초기화됩니다.
pub struct ServiceRegistration {
    /// 서비스의 고유 이름
    pub name: &'static str,
    /// 인스턴스 생성 함수 (trait object로 반환하여 일괄 init 가능)
    pub construct: fn() -> Arc<dyn Service>,
}

/// 리포지토리 등록 정보
///
/// ServiceRegistration과 동일한 구조를 가지지만 별도 타입으로 관리되어
/// 리포지토리가 서비스보다 먼저 초기화되도록 보장합니다.
pub struct RepositoryRegistration {
    /// 리포지토리의 고유 이름
    pub name: &'static str,
    /// 인스턴스 생성 함수
    pub construct: fn() -> Arc<dyn Repository>,
}

// 컴파일 타임에 모든 등록 정보를 수집합니다.
inventory::collect!(ServiceRegistration);
inventory::collect!(RepositoryRegistration);

/// 싱글톤 의존성 주입 컨테이너
///
/// Spring Framework의 ApplicationContext + BeanFactory 역할을 담당합니다.
///
/// # 주요 기능
///
/// - **싱글톤 보장**: 각 타입당 정확히 하나의 인스턴스만 생성
/// - **지연 초기화**: 첫 요청 시점에 인스턴스 생성
/// - **순환 참조 방지**: 초기화 중인 타입을 추적하여 데드락 방지
/// - **Thread-safe**: `RwLock`을 사용한 동시성 안전성
pub struct ServiceLocator {
    /// 생성된 인스턴스들의 캐시 (`TypeId` → 인스턴스)
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
    /// 현재 초기화 중인 타입들 (순환 참조 방지용)
    initializing: RwLock<HashSet<TypeId>>,
}

impl ServiceLocator {
    fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
            initializing: RwLock::new(HashSet::new()),
        }
    }

    /// 이미 등록된 싱글톤 인스턴스를 가져옵니다.
    ///
    /// `set()`으로 직접 등록된 인프라 컴포넌트(Database, RedisClient)를
    /// 조회할 때 사용합니다. Spring의 `getBean(Class<T>)`과 동일한 역할입니다.
    ///
    /// # Panics
    ///
    /// 요청한 타입이 등록되어 있지 않으면 패닉합니다. 부팅 순서 오류를
    /// 조기에 발견하기 위한 의도적 동작입니다.
    pub fn get<T: 'static + Send + Sync>() -> Arc<T> {
        let type_id = TypeId::of::<T>();
        let type_name = std::any::type_name::<T>();

        let instances = LOCATOR.instances.read().unwrap();
        match instances.get(&type_id) {
            Some(instance) => instance
                .clone()
                .downcast::<T>()
                .expect("Type mismatch in ServiceLocator"),
            None => panic!(
                "Instance not found: {}. Register it with ServiceLocator::set() before use",
                type_name
            ),
        }
    }

    /// 싱글톤 인스턴스를 가져오거나, 없으면 생성하여 등록합니다.
    ///
    /// 각 서비스/리포지토리의 `instance()` 메서드가 호출하는 핵심 진입점입니다.
    ///
    /// ## 처리 과정
    ///
    /// 1. **캐시 확인 (O(1))**: 이미 생성된 인스턴스가 있으면 즉시 반환
    /// 2. **순환 참조 검사**: 현재 생성 중인 타입이면 패닉 (A → B → A 감지)
    /// 3. **인스턴스 생성**: 잠금을 잡지 않은 상태에서 생성자 호출
    ///    (생성자 안에서 다른 컴포넌트의 `instance()` 호출 가능)
    /// 4. **캐싱**: 더블 체크 후 캐시에 저장
    ///
    /// # Panics
    ///
    /// 순환 의존성이 감지되면 패닉합니다:
    ///
    /// ```text
    /// ❌ Circular dependency detected for type: MenuService
    /// ```
    pub fn get_or_init<T, F>(build: F) -> Arc<T>
    where
        T: 'static + Send + Sync,
        F: FnOnce() -> T,
    {
        let type_id = TypeId::of::<T>();
        let type_name = std::any::type_name::<T>();

        // 이미 생성된 인스턴스 확인
        {
            let instances = LOCATOR.instances.read().unwrap();
            if let Some(instance) = instances.get(&type_id) {
                return instance
                    .clone()
                    .downcast::<T>()
                    .expect("Type mismatch in ServiceLocator");
            }
        }

        // 순환 참조 검사 후 초기화 중임을 표시
        {
            let mut initializing = LOCATOR.initializing.write().unwrap();
            if initializing.contains(&type_id) {
                eprintln!("❌ Circular dependency detected for type: {}", type_name);
                panic!(
                    "Circular dependency detected: {} is already being initialized",
                    type_name
                );
            }
            initializing.insert(type_id);
        }

        // 잠금 밖에서 생성: 생성자 내부의 의존성 instance() 호출이 가능해야 함
        let instance = Arc::new(build());

        let result = {
            let mut instances = LOCATOR.instances.write().unwrap();
            // 더블 체크: 경쟁 상황에서 먼저 등록된 인스턴스를 우선
            instances
                .entry(type_id)
                .or_insert_with(|| instance.clone() as Arc<dyn Any + Send + Sync>)
                .clone()
                .downcast::<T>()
                .expect("Type mismatch in ServiceLocator")
        };

        // 초기화 완료 표시
        {
            let mut initializing = LOCATOR.initializing.write().unwrap();
            initializing.remove(&type_id);
        }

        result
    }

    /// 외부에서 생성된 인스턴스를 직접 등록합니다.
    ///
    /// Spring의 `registerSingleton()`과 동일한 역할로, 레지스트리로
    /// 관리되지 않는 인프라 컴포넌트(Database, RedisClient)를
    /// main에서 수동 등록할 때 사용됩니다.
    ///
    /// ```rust,ignore
    /// let database = Arc::new(Database::new().await?);
    /// ServiceLocator::set(database);
    /// ```
    pub fn set<T: 'static + Send + Sync>(instance: Arc<T>) {
        let type_id = TypeId::of::<T>();
        let type_name = std::any::type_name::<T>();
        let clean_name = Self::extract_clean_type_name(type_name);

        println!("📦 Registering: {}", clean_name);

        let mut instances = LOCATOR.instances.write().unwrap();
        instances.insert(type_id, instance as Arc<dyn Any + Send + Sync>);
    }

    /// 타입 이름에서 실제 타입 이름을 추출합니다.
    ///
    /// `std::any::type_name::<T>()`는 전체 모듈 경로를 포함하므로
    /// (예: `platpal_backend::services::menus::MenuService`)
    /// 마지막 세그먼트만 사용합니다.
    fn extract_clean_type_name(type_name: &str) -> String {
        if let Some(pos) = type_name.rfind("::") {
            type_name[pos + 2..].to_string()
        } else {
            type_name.to_string()
        }
    }

    /// 모든 서비스와 리포지토리를 초기화합니다.
    ///
    /// 애플리케이션 시작 시 호출되어 등록된 모든 컴포넌트의 인스턴스를
    /// 미리 생성하고 각각의 `init()`을 실행합니다 (인덱스 생성 등).
    ///
    /// # 초기화 순서
    ///
    /// 1. **Repository 먼저**: 데이터 계층이 비즈니스 계층보다 먼저 초기화
    /// 2. **Service 나중에**: 리포지토리 의존성이 해결된 후 서비스 초기화
    pub async fn initialize_all() -> Result<(), Box<dyn std::error::Error>> {
        print_boxed_title("🔄 INITIALIZING SERVICE REGISTRY");

        // 1단계: 리포지토리 생성 + 초기화
        let repo_registrations: Vec<_> = inventory::iter::<RepositoryRegistration>().collect();
        let repo_count = repo_registrations.len();

        if repo_count > 0 {
            print_step_start(1, "Creating Repository instances");

            for registration in repo_registrations {
                print_sub_task(registration.name, "Creating...");
                let repository = (registration.construct)();
                repository.init().await?;
                print_sub_task(registration.name, "✓ Initialized");
            }

            print_step_complete(1, "Repository instances created", repo_count);
        }

        // 2단계: 서비스 생성 + 초기화
        let service_registrations: Vec<_> = inventory::iter::<ServiceRegistration>().collect();
        let service_count = service_registrations.len();

        if service_count > 0 {
            print_step_start(2, "Creating Service instances");

            for registration in service_registrations {
                print_sub_task(registration.name, "Creating...");
                let service = (registration.construct)();
                service.init().await?;
                print_sub_task(registration.name, "✓ Initialized");
            }

            print_step_complete(2, "Service instances created", service_count);
        }

        print_final_summary(repo_count, service_count);

        Ok(())
    }
}

/// 전역 서비스 로케이터 인스턴스
///
/// 애플리케이션 전체에서 사용되는 유일한 ServiceLocator 인스턴스입니다.
/// `Lazy<T>`를 사용하여 첫 접근 시에만 초기화됩니다.
static LOCATOR: Lazy<ServiceLocator> = Lazy::new(ServiceLocator::new);

#[cfg(test)]
mod tests {
    use super::*;

    struct CounterComponent {
        value: u32,
    }

    #[test]
    fn test_get_or_init_returns_same_instance() {
        let first = ServiceLocator::get_or_init(|| CounterComponent { value: 1 });
        let second = ServiceLocator::get_or_init(|| CounterComponent { value: 2 });

        // 두 번째 생성자는 호출되지 않고 캐시된 인스턴스가 반환되어야 함
        assert_eq!(first.value, 1);
        assert_eq!(second.value, 1);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_set_then_get() {
        struct ManualComponent {
            label: &'static str,
        }

        ServiceLocator::set(Arc::new(ManualComponent { label: "manual" }));
        let fetched = ServiceLocator::get::<ManualComponent>();

        assert_eq!(fetched.label, "manual");
    }
}
