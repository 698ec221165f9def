//! Static page content. Entry order is display order.

#[derive(Clone, Copy, PartialEq)]
pub struct PhotoEntry {
    pub src: &'static str,
    pub caption: &'static str,
}

#[derive(Clone, Copy, PartialEq)]
pub struct TimelineEntry {
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Clone, Copy, PartialEq)]
pub struct DreamEntry {
    pub icon: &'static str,
    pub text: &'static str,
}

pub const PHOTOS: [PhotoEntry; 11] = [
    PhotoEntry { src: "/images/photo1.jpeg", caption: "Our beautiful moments together" },
    PhotoEntry { src: "/images/photo2.jpeg", caption: "Laughing like there's no tomorrow" },
    PhotoEntry { src: "/images/photo3.jpeg", caption: "Adventures in Hyderabad" },
    PhotoEntry { src: "/images/photo4.jpeg", caption: "Sweet little memories" },
    PhotoEntry { src: "/images/photo5.jpeg", caption: "Together is our favorite place" },
    PhotoEntry { src: "/images/photo6.jpeg", caption: "Every moment counts" },
    PhotoEntry { src: "/images/photo7.jpeg", caption: "Our cozy moments" },
    PhotoEntry { src: "/images/photo8.jpeg", caption: "Happiness looks like this" },
    PhotoEntry { src: "/images/photo9.jpeg", caption: "Forever smiling with you" },
    PhotoEntry { src: "/images/photo10.jpeg", caption: "Shopping & selfies" },
    PhotoEntry { src: "/images/photo11.jpeg", caption: "Our happiest together" },
];

pub const TIMELINE: [TimelineEntry; 6] = [
    TimelineEntry {
        title: "Where It All Began",
        body: "Back then, we were just friends… sharing laughs, silly jokes, and food that \
               somehow tasted better together. Hyderabad became our world — chai breaks, \
               travels, long walks, and late-night talks.",
    },
    TimelineEntry {
        title: "Bittu & Sweety",
        body: "Somewhere between shared meals and shared dreams, friendship turned into \
               something deeper. We became Bittu and Sweety — and that changed everything.",
    },
    TimelineEntry {
        title: "The First Kiss 🦋",
        body: "I still remember our first kiss, Sweety. The butterflies, the nervous smiles, \
               the way time paused. In that moment, I knew my Bittu heart belonged to you \
               forever.",
    },
    TimelineEntry {
        title: "Distance Made Us Stronger",
        body: "When I shifted to Vizag for my job, distance tested us. We missed each other \
               deeply — the comfort, the presence, the peace. Even when miles separated us, \
               my heart still whispered your name, Sweety.",
    },
    TimelineEntry {
        title: "Our Nights Together",
        body: "All the nights we spent talking are forever memorable. Those late-night \
               conversations, the laughter, the silence that said more than words ever \
               could — every second with you felt like home.",
    },
    TimelineEntry {
        title: "Thoughts That Match",
        body: "Even miles apart, our thoughts matched. Our plans matched. Our dreams \
               matched. That's when I knew — this is forever.",
    },
];

pub const DREAMS: [DreamEntry; 5] = [
    DreamEntry { icon: "✈️", text: "Traveling the world together — every new place, hand in hand" },
    DreamEntry { icon: "💒", text: "Getting married — the most beautiful day of our lives" },
    DreamEntry { icon: "🏡", text: "I imagine building a home with you, Sweety." },
    DreamEntry { icon: "👶", text: "I imagine hearing little footsteps running around." },
    DreamEntry {
        icon: "👴👵",
        text: "I imagine growing old with you… and I still want to call you \"Bittu\" when \
               we're 70.",
    },
];

pub const MUSIC_SRC: &str = "/music/her.mp3";
pub const VIDEO_SRC: &str = "/video/memory.mp4";
pub const VIDEO_POSTER: &str = "/images/photo11.jpeg";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn photo_paths_are_sequential_jpegs() {
        assert_eq!(PHOTOS.len(), 11);
        for (i, photo) in PHOTOS.iter().enumerate() {
            assert_eq!(photo.src, format!("/images/photo{}.jpeg", i + 1));
            assert!(!photo.caption.is_empty());
        }
    }

    #[test]
    fn timeline_tells_the_whole_story() {
        assert_eq!(TIMELINE.len(), 6);
        assert_eq!(TIMELINE[0].title, "Where It All Began");
        assert_eq!(TIMELINE[5].title, "Thoughts That Match");
        for event in &TIMELINE {
            assert!(!event.title.is_empty());
            assert!(!event.body.is_empty());
        }
    }

    #[test]
    fn every_dream_has_an_icon_and_text() {
        assert_eq!(DREAMS.len(), 5);
        for dream in &DREAMS {
            assert!(!dream.icon.is_empty());
            assert!(!dream.text.is_empty());
        }
    }

    #[test]
    fn media_paths_point_at_static_assets() {
        assert!(MUSIC_SRC.starts_with("/music/"));
        assert!(VIDEO_SRC.starts_with("/video/"));
        assert!(VIDEO_POSTER.starts_with("/images/"));
    }
}
