mod helpers;
mod test_dashboard;
