pub mod in_;
pub mod out_;
