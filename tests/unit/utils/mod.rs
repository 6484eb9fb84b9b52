mod test_display;
mod test_logger;
