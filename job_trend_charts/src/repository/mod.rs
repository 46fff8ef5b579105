pub mod json_record_repository_impl;
