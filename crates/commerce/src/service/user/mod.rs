mod query;

pub use self::query::UserQueryService;
