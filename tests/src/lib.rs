#[cfg(test)]
mod data;
#[cfg(test)]
mod layout;
#[cfg(test)]
mod ranges;
#[cfg(test)]
mod ucd;
