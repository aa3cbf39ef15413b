use rand::Rng;

const INTERVIEW_COVERS: &[&str] = &[
    "/adobe.png",
    "/amazon.png",
    "/facebook.png",
    "/hostinger.png",
    "/pinterest.png",
    "/quora.png",
    "/reddit.png",
    "/skype.png",
    "/spotify.png",
    "/telegram.png",
    "/tiktok.png",
    "/yahoo.png",
];

/// Picks the cover image shown on an interview card.
pub trait CoverSelector: Send + Sync {
    fn select(&self) -> String;
}

/// Uniform pick from the bundled company logos.
pub struct RandomCover;

impl CoverSelector for RandomCover {
    fn select(&self) -> String {
        let index = rand::thread_rng().gen_range(0..INTERVIEW_COVERS.len());
        format!("/covers{}", INTERVIEW_COVERS[index])
    }
}
