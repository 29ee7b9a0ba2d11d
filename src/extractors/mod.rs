pub mod json_object;
