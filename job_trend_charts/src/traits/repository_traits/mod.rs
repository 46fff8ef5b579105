pub mod job_record_repository;
