pub(crate) mod advent_of_code;
pub(crate) mod slack;
