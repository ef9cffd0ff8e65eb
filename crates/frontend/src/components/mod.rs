//! Reusable UI components.

mod announcement_card;
mod announcement_list;

pub use announcement_card::{AnnouncementCard, AnnouncementCardProps};
pub use announcement_list::{AnnouncementList, AnnouncementListProps};
