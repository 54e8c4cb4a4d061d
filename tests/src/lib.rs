#[cfg(test)]
#[macro_use]
extern crate lazy_static;

#[cfg(test)]
mod data;
#[cfg(test)]
mod icu;
#[cfg(test)]
mod ucd;
