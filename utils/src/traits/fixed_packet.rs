/// Packets whose encoded length never changes.
pub trait FixedPacket {
    fn bytes_count() -> usize;
}
