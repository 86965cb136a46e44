mod tests_recovery;
mod tests_tokenizer;
