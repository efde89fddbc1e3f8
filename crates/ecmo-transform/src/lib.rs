pub mod build;
pub mod coalesce;
pub mod datetime;
pub mod derive;
pub mod headers;

pub use build::build_table;
pub use coalesce::{coalesce_all, coalesce_duplicates};
pub use datetime::parse_case_date;
pub use derive::{
    DAYS_ON_ECMO_COLUMN, MAP_LINK_COLUMN, SERIAL_COLUMN, add_map_links, add_serial_numbers,
    add_support_days,
};
pub use headers::normalize_headers;
