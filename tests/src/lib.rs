#[cfg(test)]
mod session;
#[cfg(test)]
mod util;
