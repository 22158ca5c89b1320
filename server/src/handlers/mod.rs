pub mod analyze_handlers;
