pub mod actions;
pub mod aggregate;
pub mod seed;

pub use aggregate::{
    Inquiry, InquiryCounts, InquiryDraft, InquiryPatch, InquiryPriority, InquiryStatus,
    ReplyRequest,
};
pub use seed::seed_inquiries;
