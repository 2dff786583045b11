// Dashboard features
pub mod chat_interpreter;
pub mod trending_report;
