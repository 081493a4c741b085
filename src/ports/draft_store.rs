use crate::domain::booking::BookingDraft;

/// Session storage for in-progress bookings. Implementations may evict
/// idle drafts; callers must handle a missing id.
pub trait DraftStore: Send + Sync {
    fn insert(&self, id: &str, draft: BookingDraft);
    fn get(&self, id: &str) -> Option<BookingDraft>;
    fn remove(&self, id: &str) -> Option<BookingDraft>;
}
