pub mod normalize_column_names;
pub use normalize_column_names::normalize_column_names;

pub mod parse_optional_date;
pub use parse_optional_date::parse_optional_date;

pub mod parse_optional_number;
pub use parse_optional_number::parse_optional_number;

pub mod read_table;
pub use read_table::{
    read_table_from_bytes, read_table_from_file, read_table_from_reader, read_table_from_string,
};

pub mod read_sector_company_list;
pub use read_sector_company_list::read_sector_company_list_from_string;
