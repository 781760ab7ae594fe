use crate::prelude::*;

mod svgs;
pub use svgs::*;

/// Tailwind `size-*` class applied to an icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SvgSize {
    Size4,
    Size5,
    #[default]
    Size6,
    Size8,
    Size10,
}
impl SvgSize {
    fn class(self) -> &'static str {
        match self {
            Self::Size4 => "size-4",
            Self::Size5 => "size-5",
            Self::Size6 => "size-6",
            Self::Size8 => "size-8",
            Self::Size10 => "size-10",
        }
    }
}

/// An MDI icon: a single path in a 24x24 box unless overridden
pub trait DrawableSvg: 'static {
    fn path() -> &'static str;

    fn view_box() -> &'static str {
        "0 0 24 24"
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct DrawSvgProps {
    /// Fill class, `fill-current` when absent
    pub base_class: Option<&'static str>,
    pub size: Option<SvgSize>,
}

/// Renders the icon `S`, see [`DrawSvgProps`]
#[allow(non_snake_case)]
pub fn DrawSvg<S: DrawableSvg>(DrawSvgProps { base_class, size }: DrawSvgProps) -> Element {
    let base_class = base_class.unwrap_or("fill-current");
    let size_class = size.unwrap_or_default().class();
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            view_box: S::view_box(),
            class: "{base_class} {size_class}",
            path { d: S::path() }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icons_default_to_size_six() {
        assert_eq!(SvgSize::default().class(), "size-6");
        assert_eq!(SvgSize::Size10.class(), "size-10");
    }
}
