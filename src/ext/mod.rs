mod path_name_ext;

pub use path_name_ext::PathNameExt;
