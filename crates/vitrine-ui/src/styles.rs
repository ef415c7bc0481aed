//! Default stylesheet for the carousel markup.

/// Stylesheet injected alongside the carousel; hosts may override any rule.
pub const CAROUSEL_CSS: &str = r"
.vitrine {
    display: flex;
    flex-direction: column;
    gap: 0.75rem;
    user-select: none;
}
.vitrine-stage {
    display: grid;
    grid-template-columns: auto 1fr 2fr 1fr auto;
    align-items: center;
    gap: 1rem;
}
.vitrine--compact .vitrine-stage {
    grid-template-columns: auto 1fr auto;
}
.vitrine-slot {
    aspect-ratio: 4 / 3;
    overflow: hidden;
    border-radius: 0.5rem;
}
.vitrine-slot img {
    width: 100%;
    height: 100%;
    object-fit: cover;
    pointer-events: none;
}
.vitrine-slot--previous,
.vitrine-slot--next {
    opacity: 0.6;
}
.vitrine-slot.is-hidden {
    display: none;
}
.vitrine-control {
    border: none;
    background: transparent;
    font-size: 2rem;
    cursor: pointer;
}
.vitrine-control.is-disabled {
    opacity: 0.3;
    cursor: default;
}
.vitrine-scrollbar {
    position: relative;
    height: 0.5rem;
    border-radius: 0.25rem;
    background: rgba(0, 0, 0, 0.1);
    cursor: pointer;
}
.vitrine-thumb {
    position: absolute;
    top: 0;
    bottom: 0;
    border-radius: 0.25rem;
    background: rgba(0, 0, 0, 0.45);
    cursor: grab;
    transition: left 0.2s ease-out;
}
.vitrine.is-dragging .vitrine-thumb {
    cursor: grabbing;
}
";
