// Public assets are served from the site root during `trunk serve` and from the
// project sub-path once deployed.
#[cfg(debug_assertions)]
pub fn get_asset_base() -> &'static str {
    ""  // Development, served at the root
}

#[cfg(not(debug_assertions))]
pub fn get_asset_base() -> &'static str {
    "/landing-scrambler"  // Production sub-path
}

pub fn asset_url(path: &str) -> String {
    format!("{}/{}", get_asset_base(), path.trim_start_matches('/'))
}

pub const DEALERSHIP_NAME: &str = "Triumph Euro Motors - São José do Rio Preto";
pub const DEALERSHIP_ADDRESS: &[&str] = &[
    "Av. Pres. Juscelino K. de Oliveira, 3600 - Loja B",
    "Jardim Moyses Miguel Haddad",
    "São José do Rio Preto - SP",
    "CEP: 15093-225",
];
pub const DEALERSHIP_PHONE_DISPLAY: &str = "(17) 3354-1300";
pub const DEALERSHIP_PHONE_TEL: &str = "+551733541300";
pub const DEALERSHIP_HOURS: &[&str] = &[
    "Segunda a Sexta: 8h às 18h",
    "Sábado: 8h às 13h",
    "Domingo: Fechado",
];
pub const MAP_SEARCH_QUERY: &str = "Triumph São José do Rio Preto";
pub const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3728.4351508311493!2d-49.415341344982956!3d-20.854503788984484!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x94bdb39357fc5ffd%3A0x1b2d87174d441f29!2sTriumph%20Euro%20Motors!5e0!3m2!1spt-BR!2sbr!4v1764262741455!5m2!1spt-BR!2sbr";
pub const REPOSITORY_URL: &str = "https://github.com";

pub fn video_embed_url(video_id: &str, autoplay: bool, start_secs: u32) -> String {
    format!(
        "https://www.youtube.com/embed/{}?autoplay={}&start={}&rel=0&modestbranding=1",
        video_id,
        u8::from(autoplay),
        start_secs
    )
}

pub fn video_thumbnail_url(video_id: &str) -> String {
    format!("https://img.youtube.com/vi/{}/maxresdefault.jpg", video_id)
}

pub fn map_search_url(query: &str) -> String {
    // Spaces go out as '+', matching what the maps search endpoint expects
    let encoded = query
        .split_whitespace()
        .map(|word| urlencoding::encode(word).into_owned())
        .collect::<Vec<_>>()
        .join("+");
    format!("https://www.google.com/maps/search/?api=1&query={}", encoded)
}

pub fn phone_link() -> String {
    format!("tel:{}", DEALERSHIP_PHONE_TEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_embed_url() {
        assert_eq!(
            video_embed_url("MfDYXfKRiyA", true, 8),
            "https://www.youtube.com/embed/MfDYXfKRiyA?autoplay=1&start=8&rel=0&modestbranding=1"
        );
        assert!(video_embed_url("x", false, 0).contains("autoplay=0&start=0"));
    }

    #[test]
    fn test_map_search_url_encodes_words() {
        assert_eq!(
            map_search_url("Triumph Rio Preto"),
            "https://www.google.com/maps/search/?api=1&query=Triumph+Rio+Preto"
        );
        assert!(map_search_url(MAP_SEARCH_QUERY).contains("S%C3%A3o"));
    }

    #[test]
    fn test_asset_url_joins_single_slash() {
        let url = asset_url("/logo.png");
        assert!(url.ends_with("/logo.png"));
        assert!(!url.contains("//"));
        assert_eq!(asset_url("logo.png"), url);
    }
}
