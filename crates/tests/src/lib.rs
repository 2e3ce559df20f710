#[cfg(test)]
mod common;

#[cfg(test)]
mod admin_destination_tests;

#[cfg(test)]
mod session_tests;

#[cfg(test)]
mod suggestion_tests;

#[cfg(test)]
mod collection_tests;

#[cfg(test)]
mod health_tests;
