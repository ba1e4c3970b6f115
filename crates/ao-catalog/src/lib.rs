//! Static seed catalog of known applications for App Organizer.

use ao_core::CatalogApp;

/// The preloaded application catalog, used to seed an empty store.
pub fn catalog() -> &'static [CatalogApp] {
    CATALOG
}

/// Look up a catalog row by bundle identifier.
pub fn by_bundle_id(bundle_id: &str) -> Option<&'static CatalogApp> {
    CATALOG.iter().find(|app| app.bundle_id == bundle_id)
}

const CATALOG: &[CatalogApp] = &[
    // Social Media
    CatalogApp { name: "Instagram", bundle_id: "com.instagram.ios", icon: "camera.fill", category: "Social Media" },
    CatalogApp { name: "Facebook", bundle_id: "com.facebook.ios", icon: "person.2.fill", category: "Social Media" },
    CatalogApp { name: "X", bundle_id: "com.x.ios", icon: "bubble.left.fill", category: "Social Media" },
    CatalogApp { name: "WhatsApp", bundle_id: "net.whatsapp.app", icon: "phone.bubble.left.fill", category: "Social Media" },
    CatalogApp { name: "Snapchat", bundle_id: "com.snapchat.ios", icon: "bolt.fill", category: "Social Media" },
    CatalogApp { name: "TikTok", bundle_id: "com.tiktok.ios", icon: "music.note.tv.fill", category: "Social Media" },
    CatalogApp { name: "LinkedIn", bundle_id: "com.linkedin.ios", icon: "briefcase.fill", category: "Social Media" },
    // Productivity
    CatalogApp { name: "Notion", bundle_id: "notion.id", icon: "doc.text.fill", category: "Productivity" },
    CatalogApp { name: "Todoist", bundle_id: "com.todoist.ios", icon: "checklist", category: "Productivity" },
    CatalogApp { name: "Slack", bundle_id: "com.slack.ios", icon: "number", category: "Productivity" },
    CatalogApp { name: "Gmail", bundle_id: "com.google.gmail", icon: "envelope.fill", category: "Productivity" },
    CatalogApp { name: "Google Calendar", bundle_id: "com.google.calendar", icon: "calendar", category: "Productivity" },
    CatalogApp { name: "Zoom", bundle_id: "us.zoom.ios", icon: "video.fill", category: "Productivity" },
    // Entertainment
    CatalogApp { name: "Netflix", bundle_id: "com.netflix.ios", icon: "play.rectangle.fill", category: "Entertainment" },
    CatalogApp { name: "YouTube", bundle_id: "com.google.youtube", icon: "play.fill", category: "Entertainment" },
    CatalogApp { name: "Disney+", bundle_id: "com.disney.disneyplus", icon: "sparkles.tv.fill", category: "Entertainment" },
    CatalogApp { name: "Twitch", bundle_id: "tv.twitch.ios", icon: "gamecontroller.fill", category: "Entertainment" },
    CatalogApp { name: "Prime Video", bundle_id: "com.amazon.primevideo", icon: "film.fill", category: "Entertainment" },
    // Games
    CatalogApp { name: "Minecraft", bundle_id: "com.mojang.minecraft", icon: "cube.fill", category: "Games" },
    CatalogApp { name: "Roblox", bundle_id: "com.roblox.ios", icon: "square.stack.3d.up.fill", category: "Games" },
    CatalogApp { name: "Candy Crush", bundle_id: "com.king.candycrush", icon: "circle.grid.3x3.fill", category: "Games" },
    CatalogApp { name: "Among Us", bundle_id: "com.innersloth.amongus", icon: "person.fill.questionmark", category: "Games" },
    CatalogApp { name: "Wordle", bundle_id: "com.nytimes.wordle", icon: "textformat.abc", category: "Games" },
    // Finance
    CatalogApp { name: "PayPal", bundle_id: "com.paypal.ios", icon: "dollarsign.circle.fill", category: "Finance" },
    CatalogApp { name: "Venmo", bundle_id: "com.venmo.ios", icon: "arrow.left.arrow.right", category: "Finance" },
    CatalogApp { name: "Robinhood", bundle_id: "com.robinhood.ios", icon: "chart.line.uptrend.xyaxis", category: "Finance" },
    CatalogApp { name: "Mint", bundle_id: "com.mint.ios", icon: "leaf.fill", category: "Finance" },
    // Health & Fitness
    CatalogApp { name: "Strava", bundle_id: "com.strava.ios", icon: "figure.run", category: "Health & Fitness" },
    CatalogApp { name: "MyFitnessPal", bundle_id: "com.myfitnesspal.ios", icon: "fork.knife.circle.fill", category: "Health & Fitness" },
    CatalogApp { name: "Headspace", bundle_id: "com.headspace.ios", icon: "brain.head.profile", category: "Health & Fitness" },
    CatalogApp { name: "Calm", bundle_id: "com.calm.ios", icon: "moon.stars.fill", category: "Health & Fitness" },
    // Shopping
    CatalogApp { name: "Amazon", bundle_id: "com.amazon.ios", icon: "cart.fill", category: "Shopping" },
    CatalogApp { name: "eBay", bundle_id: "com.ebay.ios", icon: "tag.fill", category: "Shopping" },
    CatalogApp { name: "Etsy", bundle_id: "com.etsy.ios", icon: "gift.fill", category: "Shopping" },
    CatalogApp { name: "Shein", bundle_id: "com.shein.ios", icon: "tshirt.fill", category: "Shopping" },
    // Travel
    CatalogApp { name: "Google Maps", bundle_id: "com.google.maps", icon: "map.fill", category: "Travel" },
    CatalogApp { name: "Airbnb", bundle_id: "com.airbnb.ios", icon: "house.fill", category: "Travel" },
    CatalogApp { name: "Uber", bundle_id: "com.uber.ios", icon: "car.fill", category: "Travel" },
    CatalogApp { name: "Booking.com", bundle_id: "com.booking.ios", icon: "bed.double.fill", category: "Travel" },
    // Food & Drink
    CatalogApp { name: "DoorDash", bundle_id: "com.doordash.ios", icon: "bag.fill", category: "Food & Drink" },
    CatalogApp { name: "Uber Eats", bundle_id: "com.ubereats.ios", icon: "takeoutbag.and.cup.and.straw.fill", category: "Food & Drink" },
    CatalogApp { name: "Starbucks", bundle_id: "com.starbucks.ios", icon: "cup.and.saucer.fill", category: "Food & Drink" },
    CatalogApp { name: "Yelp", bundle_id: "com.yelp.ios", icon: "star.bubble.fill", category: "Food & Drink" },
    // Utilities
    CatalogApp { name: "Calculator", bundle_id: "com.apple.calculator", icon: "plus.slash.minus", category: "Utilities" },
    CatalogApp { name: "1Password", bundle_id: "com.1password.ios", icon: "key.fill", category: "Utilities" },
    CatalogApp { name: "Google Drive", bundle_id: "com.google.drive", icon: "externaldrive.fill", category: "Utilities" },
    CatalogApp { name: "Dropbox", bundle_id: "com.dropbox.ios", icon: "shippingbox.fill", category: "Utilities" },
    CatalogApp { name: "Google Translate", bundle_id: "com.google.translate", icon: "character.bubble.fill", category: "Utilities" },
    // Education
    CatalogApp { name: "Duolingo", bundle_id: "com.duolingo.ios", icon: "graduationcap.fill", category: "Education" },
    CatalogApp { name: "Khan Academy", bundle_id: "org.khanacademy.ios", icon: "book.fill", category: "Education" },
    CatalogApp { name: "Quizlet", bundle_id: "com.quizlet.ios", icon: "rectangle.stack.fill", category: "Education" },
    // News
    CatalogApp { name: "NYT News", bundle_id: "com.nytimes.news", icon: "newspaper.fill", category: "News" },
    CatalogApp { name: "BBC News", bundle_id: "uk.co.bbc.news", icon: "globe", category: "News" },
    CatalogApp { name: "Reddit", bundle_id: "com.reddit.ios", icon: "quote.bubble.fill", category: "News" },
    // Photography
    CatalogApp { name: "VSCO", bundle_id: "com.vsco.ios", icon: "camera.filters", category: "Photography" },
    CatalogApp { name: "Lightroom", bundle_id: "com.adobe.lightroom", icon: "slider.horizontal.3", category: "Photography" },
    CatalogApp { name: "Google Photos", bundle_id: "com.google.photos", icon: "photo.on.rectangle", category: "Photography" },
    // Music
    CatalogApp { name: "Spotify", bundle_id: "com.spotify.ios", icon: "music.note", category: "Music" },
    CatalogApp { name: "Apple Music", bundle_id: "com.apple.music", icon: "music.note.list", category: "Music" },
    CatalogApp { name: "SoundCloud", bundle_id: "com.soundcloud.ios", icon: "waveform", category: "Music" },
    CatalogApp { name: "Shazam", bundle_id: "com.shazam.ios", icon: "mic.fill", category: "Music" },
    // Lifestyle
    CatalogApp { name: "Pinterest", bundle_id: "com.pinterest.ios", icon: "pin.fill", category: "Lifestyle" },
    CatalogApp { name: "Zillow", bundle_id: "com.zillow.ios", icon: "building.2.fill", category: "Lifestyle" },
    CatalogApp { name: "Tinder", bundle_id: "com.tinder.ios", icon: "flame.fill", category: "Lifestyle" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use ao_core::Category;
    use std::collections::HashSet;

    #[test]
    fn every_category_resolves() {
        for app in catalog() {
            assert!(
                Category::from_name(app.category).is_some(),
                "unresolvable category {} for {}",
                app.category,
                app.name
            );
        }
    }

    #[test]
    fn bundle_ids_are_unique() {
        let mut seen = HashSet::new();
        for app in catalog() {
            assert!(seen.insert(app.bundle_id), "duplicate bundle id {}", app.bundle_id);
        }
    }

    #[test]
    fn covers_the_full_taxonomy() {
        let covered: HashSet<&str> = catalog().iter().map(|app| app.category).collect();
        for category in Category::ALL {
            assert!(covered.contains(category.name()), "no seed apps for {}", category.name());
        }
    }

    #[test]
    fn lookup_by_bundle_id() {
        let app = by_bundle_id("com.spotify.ios").expect("spotify in catalog");
        assert_eq!(app.name, "Spotify");
        assert!(by_bundle_id("com.example.missing").is_none());
    }
}
