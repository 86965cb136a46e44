mod tests_isolation;
mod tests_pipeline;
mod tests_scenarios;
