/// Block range a snapshot run covers, inclusive on both ends.
///
/// `end_block` of `None` means "resolve to the current chain height once at
/// run start"; the resolved height is then fixed for the whole run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockRange {
    pub start_block: u64,
    pub end_block: Option<u64>,
}
