pub mod cli;
pub mod config;
pub mod errors;
pub mod execute;
pub mod http_request;
pub mod http_request_executor;
pub mod logging;
pub mod output_writer;
pub mod request_file_parser;
