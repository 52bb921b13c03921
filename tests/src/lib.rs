#[cfg(test)]
mod canonical;
#[cfg(test)]
mod chunking;
