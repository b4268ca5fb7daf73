//! Fixed display lists: color options, gallery, review videos, quick specs and
//! the specification tabs. Nothing here changes at runtime.

#[derive(Clone, Debug, PartialEq)]
pub struct ColorOption {
    pub id: &'static str,
    pub name: &'static str,
    pub color: &'static str,
    pub image: &'static str,
    /// RGB triple used for the glow around the selected swatch.
    pub glow_rgb: (u8, u8, u8),
}

#[derive(Clone, Debug, PartialEq)]
pub struct GalleryImage {
    pub id: u32,
    pub src: &'static str,
    pub alt: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReviewVideo {
    pub id: &'static str,
    pub youtube_id: &'static str,
    pub start_secs: u32,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuickSpec {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Highlight {
    pub value: &'static str,
    pub title: &'static str,
    pub text: &'static str,
    pub icon_path: &'static str,
}

pub const DEFAULT_COLOR_ID: &str = "baja-orange";
pub const FALLBACK_PRODUCT_IMAGE: &str = "/scrambler-sem-fundo.avif";
pub const PRICE: &str = "R$ 34.490,00";

pub const COLOR_OPTIONS: &[ColorOption] = &[
    ColorOption {
        id: "khaki-green",
        name: "Matt Khaki Green",
        color: "#2F4A3A",
        image: "/scrambler-400x-verde/scrambler 400 x_my24_matt khaki green_rhs.avif",
        glow_rgb: (85, 107, 47),
    },
    ColorOption {
        id: "baja-orange",
        name: "Baja Orange",
        color: "#D97706",
        image: "/scrambler-laranja-360/scrambler-laranja-grau1.avif",
        glow_rgb: (217, 119, 6),
    },
    ColorOption {
        id: "phantom-black",
        name: "Phantom Black",
        color: "#0C0F12",
        image: "/scrambler-400x-preta/scrambler-400x-preta1.avif",
        glow_rgb: (12, 15, 18),
    },
];

pub fn find_color(id: &str) -> Option<&'static ColorOption> {
    COLOR_OPTIONS.iter().find(|c| c.id == id)
}

pub const GALLERY_IMAGES: &[GalleryImage] = &[
    GalleryImage { id: 1, src: "/scrambler-wallpaper-oficial.avif", alt: "Triumph Scrambler 400X - Moto scrambler disponível em São José do Rio Preto" },
    GalleryImage { id: 2, src: "/scrambler-praia-wallpaper.jpeg", alt: "Scrambler 400X na praia - Triumph em São José do Rio Preto" },
    GalleryImage { id: 3, src: "/scrambler-wallpaper-7.jpeg", alt: "Scrambler 400X - Concessionária Triumph Euro Motors Rio Preto" },
    GalleryImage { id: 4, src: "/scrambler-wallpaper3.jpeg", alt: "Triumph Scrambler 400X - Moto 400cc em São José do Rio Preto" },
    GalleryImage { id: 5, src: "/wallpaper-scrambler.jpeg", alt: "Scrambler 400X - Test ride disponível em São José do Rio Preto" },
    GalleryImage { id: 6, src: "/scrambler-wallpaper-6.jpeg", alt: "Triumph Scrambler 400X - Preço e ficha técnica em São José do Rio Preto" },
];

pub const REVIEW_VIDEOS: &[ReviewVideo] = &[
    ReviewVideo {
        id: "video1",
        youtube_id: "Z4jeGx7be78",
        start_secs: 0,
        title: "Review Completo",
        description: "Análise detalhada da Scrambler 400X",
    },
    ReviewVideo {
        id: "video2",
        youtube_id: "MfDYXfKRiyA",
        start_secs: 8,
        title: "Impressões e Viagem",
        description: "Teste real em estrada",
    },
];

pub const QUICK_SPECS: &[QuickSpec] = &[
    QuickSpec { value: "398 cc", label: "Cilindrada" },
    QuickSpec { value: "≈ 39 cv", label: "Potência" },
    QuickSpec { value: "6 marchas", label: "Câmbio" },
    QuickSpec { value: "ABS", label: "Segurança" },
];

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        value: "≈ 39 cv",
        title: "Potência",
        text: "Motor single-cylinder de 398cc com resposta imediata",
        icon_path: "M13 10V3L4 14h7v7l9-11h-7z",
    },
    Highlight {
        value: "ABS",
        title: "Segurança",
        text: "Sistema de freios ABS para máxima segurança",
        icon_path: "M9 12l2 2 4-4m5.618-4.016A11.955 11.955 0 0112 2.944a11.955 11.955 0 01-8.618 3.04A12.02 12.02 0 003 9c0 5.591 3.824 10.29 9 11.622 5.176-1.332 9-6.03 9-11.622 0-1.042-.133-2.052-.382-3.016z",
    },
    Highlight {
        value: "6",
        title: "Marchas",
        text: "Câmbio de 6 velocidades com troca suave",
        icon_path: "M12 6V4m0 2a2 2 0 100 4m0-4a2 2 0 110 4m-6 8a2 2 0 100-4m0 4a2 2 0 110-4m0 4v2m0-6V4m6 6v10m6-2a2 2 0 100-4m0 4a2 2 0 110-4m0 4v2m0-6V4",
    },
    Highlight {
        value: "400X",
        title: "Scrambler",
        text: "DNA autêntico Triumph com design atemporal",
        icon_path: "M7 21a4 4 0 01-4-4V5a2 2 0 012-2h4a2 2 0 012 2v12a4 4 0 01-4 4zm0 0h12a2 2 0 002-2v-4a2 2 0 00-2-2h-2.343M11 7.343l1.657-1.657a2 2 0 012.828 0l2.829 2.829a2 2 0 010 2.828l-8.486 8.485M7 17h.01",
    },
];

pub const LIFESTYLE_IMAGES: &[(&str, &str)] = &[
    ("/scrambler-praia-wallpaper.jpeg", "Scrambler 400X lifestyle na praia"),
    ("/wallpaper-scrambler.jpeg", "Scrambler 400X lifestyle"),
    ("/scrambler-wallpaper-oficial.avif", "Scrambler 400X em ação"),
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpecTab {
    #[default]
    Motor,
    Chassi,
    Dimensoes,
    Equipamentos,
}

impl SpecTab {
    pub const ALL: [SpecTab; 4] = [
        SpecTab::Motor,
        SpecTab::Chassi,
        SpecTab::Dimensoes,
        SpecTab::Equipamentos,
    ];

    pub fn id(self) -> &'static str {
        match self {
            SpecTab::Motor => "motor",
            SpecTab::Chassi => "chassi",
            SpecTab::Dimensoes => "dimensoes",
            SpecTab::Equipamentos => "equipamentos",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SpecTab::Motor => "Motor & Transmissão",
            SpecTab::Chassi => "Chassi & Suspensão",
            SpecTab::Dimensoes => "Dimensões & Ergonomia",
            SpecTab::Equipamentos => "Equipamentos",
        }
    }

    pub fn from_id(id: &str) -> Option<SpecTab> {
        Self::ALL.into_iter().find(|tab| tab.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_color_is_listed() {
        assert!(find_color(DEFAULT_COLOR_ID).is_some());
        assert!(find_color("candy-red").is_none());
    }

    #[test]
    fn test_ids_are_unique() {
        let colors: HashSet<_> = COLOR_OPTIONS.iter().map(|c| c.id).collect();
        assert_eq!(colors.len(), COLOR_OPTIONS.len());

        let images: HashSet<_> = GALLERY_IMAGES.iter().map(|i| i.id).collect();
        assert_eq!(images.len(), GALLERY_IMAGES.len());

        let videos: HashSet<_> = REVIEW_VIDEOS.iter().map(|v| v.id).collect();
        assert_eq!(videos.len(), REVIEW_VIDEOS.len());
    }

    #[test]
    fn test_spec_tab_ids() {
        for tab in SpecTab::ALL {
            assert_eq!(SpecTab::from_id(tab.id()), Some(tab));
        }
        assert_eq!(SpecTab::from_id("garantia"), None);
        assert_eq!(SpecTab::default().id(), "motor");
    }
}
