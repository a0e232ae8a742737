mod tests_plan;
