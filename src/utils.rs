pub mod json;

#[cfg(test)]
mod json_test;
#[cfg(test)]
pub mod test_util;
