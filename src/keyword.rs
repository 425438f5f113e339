//! Perfect-hash tables for recognized CSS names.
//!
//! Lookups are ASCII case-insensitive and byte-exact otherwise; escaped
//! spellings are not resolved here. Unknown names return `None`.

use phf::phf_map;
use unicase::UniCase;

/// A recognized at-rule name, the part after the `@`.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AtRuleKeyword {
	Charset,
	Container,
	CounterStyle,
	Document,
	FontFace,
	FontFeatureValues,
	Import,
	Keyframes,
	Layer,
	Media,
	Namespace,
	Page,
	Property,
	Scope,
	StartingStyle,
	Supports,
	Viewport,
}

impl AtRuleKeyword {
	pub fn as_str(&self) -> &'static str {
		match self {
			AtRuleKeyword::Charset => "charset",
			AtRuleKeyword::Container => "container",
			AtRuleKeyword::CounterStyle => "counter-style",
			AtRuleKeyword::Document => "document",
			AtRuleKeyword::FontFace => "font-face",
			AtRuleKeyword::FontFeatureValues => "font-feature-values",
			AtRuleKeyword::Import => "import",
			AtRuleKeyword::Keyframes => "keyframes",
			AtRuleKeyword::Layer => "layer",
			AtRuleKeyword::Media => "media",
			AtRuleKeyword::Namespace => "namespace",
			AtRuleKeyword::Page => "page",
			AtRuleKeyword::Property => "property",
			AtRuleKeyword::Scope => "scope",
			AtRuleKeyword::StartingStyle => "starting-style",
			AtRuleKeyword::Supports => "supports",
			AtRuleKeyword::Viewport => "viewport",
		}
	}
}

/// A map for matching at-rule names to their keyword.
static AT_RULES: phf::Map<UniCase<&'static str>, AtRuleKeyword> = phf_map! {
	UniCase::ascii("charset") => AtRuleKeyword::Charset,
	UniCase::ascii("container") => AtRuleKeyword::Container,
	UniCase::ascii("counter-style") => AtRuleKeyword::CounterStyle,
	UniCase::ascii("document") => AtRuleKeyword::Document,
	UniCase::ascii("font-face") => AtRuleKeyword::FontFace,
	UniCase::ascii("font-feature-values") => AtRuleKeyword::FontFeatureValues,
	UniCase::ascii("import") => AtRuleKeyword::Import,
	UniCase::ascii("keyframes") => AtRuleKeyword::Keyframes,
	UniCase::ascii("-webkit-keyframes") => AtRuleKeyword::Keyframes,
	UniCase::ascii("layer") => AtRuleKeyword::Layer,
	UniCase::ascii("media") => AtRuleKeyword::Media,
	UniCase::ascii("namespace") => AtRuleKeyword::Namespace,
	UniCase::ascii("page") => AtRuleKeyword::Page,
	UniCase::ascii("property") => AtRuleKeyword::Property,
	UniCase::ascii("scope") => AtRuleKeyword::Scope,
	UniCase::ascii("starting-style") => AtRuleKeyword::StartingStyle,
	UniCase::ascii("supports") => AtRuleKeyword::Supports,
	UniCase::ascii("viewport") => AtRuleKeyword::Viewport,
	UniCase::ascii("-ms-viewport") => AtRuleKeyword::Viewport,
};

/// Match an at-rule name, without its leading `@`, to its keyword.
pub fn at_rule(name: &[u8]) -> Option<AtRuleKeyword> {
	let name = std::str::from_utf8(name).ok()?;
	AT_RULES.get(&UniCase::ascii(name)).copied()
}

/// A recognized property name.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Property {
	AlignContent,
	AlignItems,
	AlignSelf,
	Animation,
	Background,
	BackgroundColor,
	BackgroundImage,
	BackgroundPosition,
	BackgroundRepeat,
	BackgroundSize,
	Border,
	BorderBottom,
	BorderCollapse,
	BorderColor,
	BorderLeft,
	BorderRadius,
	BorderRight,
	BorderStyle,
	BorderTop,
	BorderWidth,
	Bottom,
	BoxShadow,
	BoxSizing,
	Clear,
	Color,
	ColumnGap,
	Content,
	Cursor,
	Direction,
	Display,
	Filter,
	Flex,
	FlexBasis,
	FlexDirection,
	FlexGrow,
	FlexShrink,
	FlexWrap,
	Float,
	Font,
	FontFamily,
	FontSize,
	FontStyle,
	FontWeight,
	Gap,
	Grid,
	GridArea,
	GridColumn,
	GridRow,
	GridTemplate,
	GridTemplateColumns,
	GridTemplateRows,
	Height,
	JustifyContent,
	Left,
	LetterSpacing,
	LineHeight,
	ListStyle,
	Margin,
	MarginBottom,
	MarginLeft,
	MarginRight,
	MarginTop,
	MaxHeight,
	MaxWidth,
	MinHeight,
	MinWidth,
	Opacity,
	Order,
	Outline,
	Overflow,
	OverflowX,
	OverflowY,
	Padding,
	PaddingBottom,
	PaddingLeft,
	PaddingRight,
	PaddingTop,
	Position,
	Right,
	RowGap,
	TextAlign,
	TextDecoration,
	TextOverflow,
	TextTransform,
	Top,
	Transform,
	Transition,
	VerticalAlign,
	Visibility,
	WhiteSpace,
	Width,
	WordBreak,
	WordSpacing,
	ZIndex,
}

impl Property {
	pub fn as_str(&self) -> &'static str {
		match self {
			Property::AlignContent => "align-content",
			Property::AlignItems => "align-items",
			Property::AlignSelf => "align-self",
			Property::Animation => "animation",
			Property::Background => "background",
			Property::BackgroundColor => "background-color",
			Property::BackgroundImage => "background-image",
			Property::BackgroundPosition => "background-position",
			Property::BackgroundRepeat => "background-repeat",
			Property::BackgroundSize => "background-size",
			Property::Border => "border",
			Property::BorderBottom => "border-bottom",
			Property::BorderCollapse => "border-collapse",
			Property::BorderColor => "border-color",
			Property::BorderLeft => "border-left",
			Property::BorderRadius => "border-radius",
			Property::BorderRight => "border-right",
			Property::BorderStyle => "border-style",
			Property::BorderTop => "border-top",
			Property::BorderWidth => "border-width",
			Property::Bottom => "bottom",
			Property::BoxShadow => "box-shadow",
			Property::BoxSizing => "box-sizing",
			Property::Clear => "clear",
			Property::Color => "color",
			Property::ColumnGap => "column-gap",
			Property::Content => "content",
			Property::Cursor => "cursor",
			Property::Direction => "direction",
			Property::Display => "display",
			Property::Filter => "filter",
			Property::Flex => "flex",
			Property::FlexBasis => "flex-basis",
			Property::FlexDirection => "flex-direction",
			Property::FlexGrow => "flex-grow",
			Property::FlexShrink => "flex-shrink",
			Property::FlexWrap => "flex-wrap",
			Property::Float => "float",
			Property::Font => "font",
			Property::FontFamily => "font-family",
			Property::FontSize => "font-size",
			Property::FontStyle => "font-style",
			Property::FontWeight => "font-weight",
			Property::Gap => "gap",
			Property::Grid => "grid",
			Property::GridArea => "grid-area",
			Property::GridColumn => "grid-column",
			Property::GridRow => "grid-row",
			Property::GridTemplate => "grid-template",
			Property::GridTemplateColumns => "grid-template-columns",
			Property::GridTemplateRows => "grid-template-rows",
			Property::Height => "height",
			Property::JustifyContent => "justify-content",
			Property::Left => "left",
			Property::LetterSpacing => "letter-spacing",
			Property::LineHeight => "line-height",
			Property::ListStyle => "list-style",
			Property::Margin => "margin",
			Property::MarginBottom => "margin-bottom",
			Property::MarginLeft => "margin-left",
			Property::MarginRight => "margin-right",
			Property::MarginTop => "margin-top",
			Property::MaxHeight => "max-height",
			Property::MaxWidth => "max-width",
			Property::MinHeight => "min-height",
			Property::MinWidth => "min-width",
			Property::Opacity => "opacity",
			Property::Order => "order",
			Property::Outline => "outline",
			Property::Overflow => "overflow",
			Property::OverflowX => "overflow-x",
			Property::OverflowY => "overflow-y",
			Property::Padding => "padding",
			Property::PaddingBottom => "padding-bottom",
			Property::PaddingLeft => "padding-left",
			Property::PaddingRight => "padding-right",
			Property::PaddingTop => "padding-top",
			Property::Position => "position",
			Property::Right => "right",
			Property::RowGap => "row-gap",
			Property::TextAlign => "text-align",
			Property::TextDecoration => "text-decoration",
			Property::TextOverflow => "text-overflow",
			Property::TextTransform => "text-transform",
			Property::Top => "top",
			Property::Transform => "transform",
			Property::Transition => "transition",
			Property::VerticalAlign => "vertical-align",
			Property::Visibility => "visibility",
			Property::WhiteSpace => "white-space",
			Property::Width => "width",
			Property::WordBreak => "word-break",
			Property::WordSpacing => "word-spacing",
			Property::ZIndex => "z-index",
		}
	}
}

/// A map for matching property names to their id.
static PROPERTIES: phf::Map<UniCase<&'static str>, Property> = phf_map! {
	UniCase::ascii("align-content") => Property::AlignContent,
	UniCase::ascii("align-items") => Property::AlignItems,
	UniCase::ascii("align-self") => Property::AlignSelf,
	UniCase::ascii("animation") => Property::Animation,
	UniCase::ascii("background") => Property::Background,
	UniCase::ascii("background-color") => Property::BackgroundColor,
	UniCase::ascii("background-image") => Property::BackgroundImage,
	UniCase::ascii("background-position") => Property::BackgroundPosition,
	UniCase::ascii("background-repeat") => Property::BackgroundRepeat,
	UniCase::ascii("background-size") => Property::BackgroundSize,
	UniCase::ascii("border") => Property::Border,
	UniCase::ascii("border-bottom") => Property::BorderBottom,
	UniCase::ascii("border-collapse") => Property::BorderCollapse,
	UniCase::ascii("border-color") => Property::BorderColor,
	UniCase::ascii("border-left") => Property::BorderLeft,
	UniCase::ascii("border-radius") => Property::BorderRadius,
	UniCase::ascii("border-right") => Property::BorderRight,
	UniCase::ascii("border-style") => Property::BorderStyle,
	UniCase::ascii("border-top") => Property::BorderTop,
	UniCase::ascii("border-width") => Property::BorderWidth,
	UniCase::ascii("bottom") => Property::Bottom,
	UniCase::ascii("box-shadow") => Property::BoxShadow,
	UniCase::ascii("box-sizing") => Property::BoxSizing,
	UniCase::ascii("clear") => Property::Clear,
	UniCase::ascii("color") => Property::Color,
	UniCase::ascii("column-gap") => Property::ColumnGap,
	UniCase::ascii("content") => Property::Content,
	UniCase::ascii("cursor") => Property::Cursor,
	UniCase::ascii("direction") => Property::Direction,
	UniCase::ascii("display") => Property::Display,
	UniCase::ascii("filter") => Property::Filter,
	UniCase::ascii("flex") => Property::Flex,
	UniCase::ascii("flex-basis") => Property::FlexBasis,
	UniCase::ascii("flex-direction") => Property::FlexDirection,
	UniCase::ascii("flex-grow") => Property::FlexGrow,
	UniCase::ascii("flex-shrink") => Property::FlexShrink,
	UniCase::ascii("flex-wrap") => Property::FlexWrap,
	UniCase::ascii("float") => Property::Float,
	UniCase::ascii("font") => Property::Font,
	UniCase::ascii("font-family") => Property::FontFamily,
	UniCase::ascii("font-size") => Property::FontSize,
	UniCase::ascii("font-style") => Property::FontStyle,
	UniCase::ascii("font-weight") => Property::FontWeight,
	UniCase::ascii("gap") => Property::Gap,
	UniCase::ascii("grid") => Property::Grid,
	UniCase::ascii("grid-area") => Property::GridArea,
	UniCase::ascii("grid-column") => Property::GridColumn,
	UniCase::ascii("grid-row") => Property::GridRow,
	UniCase::ascii("grid-template") => Property::GridTemplate,
	UniCase::ascii("grid-template-columns") => Property::GridTemplateColumns,
	UniCase::ascii("grid-template-rows") => Property::GridTemplateRows,
	UniCase::ascii("height") => Property::Height,
	UniCase::ascii("justify-content") => Property::JustifyContent,
	UniCase::ascii("left") => Property::Left,
	UniCase::ascii("letter-spacing") => Property::LetterSpacing,
	UniCase::ascii("line-height") => Property::LineHeight,
	UniCase::ascii("list-style") => Property::ListStyle,
	UniCase::ascii("margin") => Property::Margin,
	UniCase::ascii("margin-bottom") => Property::MarginBottom,
	UniCase::ascii("margin-left") => Property::MarginLeft,
	UniCase::ascii("margin-right") => Property::MarginRight,
	UniCase::ascii("margin-top") => Property::MarginTop,
	UniCase::ascii("max-height") => Property::MaxHeight,
	UniCase::ascii("max-width") => Property::MaxWidth,
	UniCase::ascii("min-height") => Property::MinHeight,
	UniCase::ascii("min-width") => Property::MinWidth,
	UniCase::ascii("opacity") => Property::Opacity,
	UniCase::ascii("order") => Property::Order,
	UniCase::ascii("outline") => Property::Outline,
	UniCase::ascii("overflow") => Property::Overflow,
	UniCase::ascii("overflow-x") => Property::OverflowX,
	UniCase::ascii("overflow-y") => Property::OverflowY,
	UniCase::ascii("padding") => Property::Padding,
	UniCase::ascii("padding-bottom") => Property::PaddingBottom,
	UniCase::ascii("padding-left") => Property::PaddingLeft,
	UniCase::ascii("padding-right") => Property::PaddingRight,
	UniCase::ascii("padding-top") => Property::PaddingTop,
	UniCase::ascii("position") => Property::Position,
	UniCase::ascii("right") => Property::Right,
	UniCase::ascii("row-gap") => Property::RowGap,
	UniCase::ascii("text-align") => Property::TextAlign,
	UniCase::ascii("text-decoration") => Property::TextDecoration,
	UniCase::ascii("text-overflow") => Property::TextOverflow,
	UniCase::ascii("text-transform") => Property::TextTransform,
	UniCase::ascii("top") => Property::Top,
	UniCase::ascii("transform") => Property::Transform,
	UniCase::ascii("transition") => Property::Transition,
	UniCase::ascii("vertical-align") => Property::VerticalAlign,
	UniCase::ascii("visibility") => Property::Visibility,
	UniCase::ascii("white-space") => Property::WhiteSpace,
	UniCase::ascii("width") => Property::Width,
	UniCase::ascii("word-break") => Property::WordBreak,
	UniCase::ascii("word-spacing") => Property::WordSpacing,
	UniCase::ascii("z-index") => Property::ZIndex,
};

/// Match a property name to its id.
pub fn property(name: &[u8]) -> Option<Property> {
	let name = std::str::from_utf8(name).ok()?;
	PROPERTIES.get(&UniCase::ascii(name)).copied()
}
