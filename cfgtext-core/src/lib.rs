//! Dialect-neutral primitives for line-oriented network device configuration text.

pub mod lines;
pub mod range;
pub mod writer;

pub use lines::{
    keyword_arg, last_token, numeric_key, significant_lines, strip_quotes, trailing_number,
    trim_quotes,
};
pub use range::{
    expand_port_list, expand_range_list, is_valid_range_list, validate_range_list, RangeError,
    MAX_PORT_INDEX, MAX_VLAN_ID,
};
pub use writer::{write_file, ConfigWriter, WriteError};
