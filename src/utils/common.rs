/// CRC32C fingerprint of an input file, used to tell inputs apart in the logs.
pub fn checksum(data: &[u8]) -> u32 {
    crc32c::crc32c(data)
}

pub fn count_digits(n: u64) -> u32 {
    if n == 0 { 1 } else { n.ilog10() + 1 }
}
