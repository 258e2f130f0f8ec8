use crate::{
    abstract_trait::{
        CategoryQueryRepositoryTrait, DynCategoryQueryRepository, DynOrderCommandRepository,
        DynOrderQueryRepository, DynProductCommandRepository, DynProductQueryRepository,
        DynUserQueryRepository, OrderCommandRepositoryTrait, OrderQueryRepositoryTrait,
        ProductCommandRepositoryTrait, ProductQueryRepositoryTrait, UnitOfWork,
        UserQueryRepositoryTrait,
    },
    domain::requests::{CreateProductRequest, SearchProducts, SearchUsers, UpdateOrderRequest},
    model::{Category, Order, Product, User},
};
use async_trait::async_trait;
use chrono::Utc;
use shared::{errors::RepositoryError, pagination::PageSource};
use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicI32, Ordering},
    },
};
use tokio::sync::RwLock;

/// Reference store backing the repository traits without a database. Writes
/// apply immediately; the real transactional store is an external
/// collaborator and plugs in behind the same traits.
#[derive(Default)]
pub struct InMemoryStore {
    products: RwLock<HashMap<i32, Product>>,
    categories: RwLock<HashMap<i32, Category>>,
    orders: RwLock<HashMap<i32, Order>>,
    users: RwLock<HashMap<i32, User>>,
    next_product_id: AtomicI32,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub async fn seed_category(&self, category: Category) {
        self.categories
            .write()
            .await
            .insert(category.category_id, category);
    }

    pub async fn seed_product(&self, product: Product) {
        self.next_product_id
            .fetch_max(product.product_id, Ordering::SeqCst);
        self.products
            .write()
            .await
            .insert(product.product_id, product);
    }

    pub async fn seed_order(&self, order: Order) {
        self.orders.write().await.insert(order.order_id, order);
    }

    pub async fn seed_user(&self, user: User) {
        self.users.write().await.insert(user.user_id, user);
    }
}

fn matches_search(candidate: &str, search: &str) -> bool {
    let needle = search.trim();
    needle.is_empty() || candidate.to_lowercase().contains(&needle.to_lowercase())
}

fn page<T>(mut matched: Vec<T>, offset: i64, limit: i64) -> Vec<T> {
    if offset >= matched.len() as i64 {
        return Vec::new();
    }
    matched
        .drain(offset.max(0) as usize..)
        .take(limit.max(0) as usize)
        .collect()
}

/// Deferred view over the product map, newest first. Each read takes a fresh
/// read lock; consistency across count and slice is whatever the store
/// provides, per the engine's contract.
struct ProductPageSource {
    store: Arc<InMemoryStore>,
    search: String,
}

#[async_trait]
impl PageSource<Product> for ProductPageSource {
    async fn count(&self) -> Result<i64, RepositoryError> {
        let products = self.store.products.read().await;
        Ok(products
            .values()
            .filter(|p| matches_search(&p.name, &self.search))
            .count() as i64)
    }

    async fn slice(&self, offset: i64, limit: i64) -> Result<Vec<Product>, RepositoryError> {
        let products = self.store.products.read().await;
        let mut matched: Vec<Product> = products
            .values()
            .filter(|p| matches_search(&p.name, &self.search))
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.product_id.cmp(&a.product_id));
        Ok(page(matched, offset, limit))
    }
}

struct UserPageSource {
    store: Arc<InMemoryStore>,
    search: String,
}

impl UserPageSource {
    fn matches(&self, user: &User) -> bool {
        matches_search(&user.firstname, &self.search)
            || matches_search(&user.lastname, &self.search)
            || matches_search(&user.email, &self.search)
    }
}

#[async_trait]
impl PageSource<User> for UserPageSource {
    async fn count(&self) -> Result<i64, RepositoryError> {
        let users = self.store.users.read().await;
        Ok(users.values().filter(|u| self.matches(u)).count() as i64)
    }

    async fn slice(&self, offset: i64, limit: i64) -> Result<Vec<User>, RepositoryError> {
        let users = self.store.users.read().await;
        let mut matched: Vec<User> = users.values().filter(|u| self.matches(u)).cloned().collect();
        matched.sort_by(|a, b| a.user_id.cmp(&b.user_id));
        Ok(page(matched, offset, limit))
    }
}

#[derive(Clone)]
pub struct MemoryProductQueryRepository {
    store: Arc<InMemoryStore>,
}

impl MemoryProductQueryRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for MemoryProductQueryRepository {
    fn find_all(&self, req: &SearchProducts) -> Arc<dyn PageSource<Product>> {
        Arc::new(ProductPageSource {
            store: self.store.clone(),
            search: req.search.clone(),
        })
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError> {
        Ok(self.store.products.read().await.get(&id).cloned())
    }

    async fn is_unique_name(&self, name: &str) -> Result<bool, RepositoryError> {
        let products = self.store.products.read().await;
        Ok(!products.values().any(|p| p.name.eq_ignore_ascii_case(name)))
    }
}

#[derive(Clone)]
pub struct MemoryProductCommandRepository {
    store: Arc<InMemoryStore>,
}

impl MemoryProductCommandRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for MemoryProductCommandRepository {
    async fn create_product(&self, req: &CreateProductRequest) -> Result<Product, RepositoryError> {
        let mut products = self.store.products.write().await;
        if products.values().any(|p| p.name.eq_ignore_ascii_case(&req.name)) {
            return Err(RepositoryError::AlreadyExists(req.name.clone()));
        }

        let id = self.store.next_product_id.fetch_add(1, Ordering::SeqCst) + 1;
        let now = Utc::now().naive_utc();
        let product = Product {
            product_id: id,
            name: req.name.clone(),
            price: req.price,
            stock: req.stock,
            category_id: req.category_id,
            created_at: Some(now),
            updated_at: Some(now),
        };
        products.insert(id, product.clone());

        Ok(product)
    }
}

#[derive(Clone)]
pub struct MemoryCategoryQueryRepository {
    store: Arc<InMemoryStore>,
}

impl MemoryCategoryQueryRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CategoryQueryRepositoryTrait for MemoryCategoryQueryRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Category>, RepositoryError> {
        Ok(self.store.categories.read().await.get(&id).cloned())
    }
}

#[derive(Clone)]
pub struct MemoryOrderQueryRepository {
    store: Arc<InMemoryStore>,
}

impl MemoryOrderQueryRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for MemoryOrderQueryRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Order>, RepositoryError> {
        Ok(self.store.orders.read().await.get(&id).cloned())
    }
}

#[derive(Clone)]
pub struct MemoryOrderCommandRepository {
    store: Arc<InMemoryStore>,
}

impl MemoryOrderCommandRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for MemoryOrderCommandRepository {
    async fn update_order(&self, req: &UpdateOrderRequest) -> Result<Order, RepositoryError> {
        let mut orders = self.store.orders.write().await;
        let order = orders
            .get_mut(&req.order_id)
            .ok_or(RepositoryError::NotFound)?;

        order.status = req.status.clone();
        if let Some(date) = req.order_date {
            order.order_date = date;
        }
        order.updated_at = Some(Utc::now().naive_utc());

        Ok(order.clone())
    }
}

#[derive(Clone)]
pub struct MemoryUserQueryRepository {
    store: Arc<InMemoryStore>,
}

impl MemoryUserQueryRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserQueryRepositoryTrait for MemoryUserQueryRepository {
    fn find_all(&self, req: &SearchUsers) -> Arc<dyn PageSource<User>> {
        Arc::new(UserPageSource {
            store: self.store.clone(),
            search: req.search.clone(),
        })
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepositoryError> {
        Ok(self.store.users.read().await.get(&id).cloned())
    }
}

pub struct MemoryUnitOfWork {
    product_query: DynProductQueryRepository,
    product_command: DynProductCommandRepository,
    category_query: DynCategoryQueryRepository,
    order_query: DynOrderQueryRepository,
    order_command: DynOrderCommandRepository,
    user_query: DynUserQueryRepository,
}

impl MemoryUnitOfWork {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self {
            product_query: Arc::new(MemoryProductQueryRepository::new(store.clone())),
            product_command: Arc::new(MemoryProductCommandRepository::new(store.clone())),
            category_query: Arc::new(MemoryCategoryQueryRepository::new(store.clone())),
            order_query: Arc::new(MemoryOrderQueryRepository::new(store.clone())),
            order_command: Arc::new(MemoryOrderCommandRepository::new(store.clone())),
            user_query: Arc::new(MemoryUserQueryRepository::new(store)),
        }
    }
}

#[async_trait]
impl UnitOfWork for MemoryUnitOfWork {
    fn product_query(&self) -> DynProductQueryRepository {
        self.product_query.clone()
    }

    fn product_command(&self) -> DynProductCommandRepository {
        self.product_command.clone()
    }

    fn category_query(&self) -> DynCategoryQueryRepository {
        self.category_query.clone()
    }

    fn order_query(&self) -> DynOrderQueryRepository {
        self.order_query.clone()
    }

    fn order_command(&self) -> DynOrderCommandRepository {
        self.order_command.clone()
    }

    fn user_query(&self) -> DynUserQueryRepository {
        self.user_query.clone()
    }

    async fn commit(&self) -> Result<(), RepositoryError> {
        // Writes apply immediately in the memory store; nothing is staged.
        Ok(())
    }
}
