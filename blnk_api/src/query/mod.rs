mod common;
pub use self::common::{add_to_url, to_query_pairs};

mod list;
pub use self::list::{BalanceQuery, ListQuery};

mod search;
pub use self::search::SearchParams;
