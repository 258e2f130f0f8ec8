mod memory;

pub use self::memory::{
    InMemoryStore, MemoryCategoryQueryRepository, MemoryOrderCommandRepository,
    MemoryOrderQueryRepository, MemoryProductCommandRepository, MemoryProductQueryRepository,
    MemoryUnitOfWork, MemoryUserQueryRepository,
};
