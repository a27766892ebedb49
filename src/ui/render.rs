use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use crate::catalog::{MediaType, MovieDetail};
use crate::ui::app::{App, Screen};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::search::{SearchField, SearchPhase};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, FAVORITE, GLOBAL_BORDER, STATUS_ERROR, TEXT, TEXT_MUTED,
};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(
        Header::new().widget(app.screen(), app.favorite_count()),
        header,
    );
    frame.render_widget(Clear, body);

    match app.screen() {
        Screen::Search => draw_search(frame, app, body),
        Screen::Detail => draw_detail(frame, app, body),
        Screen::Favorites => draw_favorites(frame, app, body),
    }

    frame.render_widget(
        Footer::new().widget(footer, app.screen(), app.last_command_error()),
        footer,
    );
}

fn draw_search(frame: &mut Frame<'_>, app: &App, body: Rect) {
    let regions = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(body);

    draw_search_bar(frame, app, regions[0]);

    let state = app.search();
    match &state.phase {
        SearchPhase::Loading => draw_notice(frame, regions[1], "Searching...", TEXT_MUTED),
        SearchPhase::Failed { message } => draw_notice(frame, regions[1], message, STATUS_ERROR),
        SearchPhase::Idle => {
            draw_notice(
                frame,
                regions[1],
                "Type a title and press Enter to search.",
                TEXT_MUTED,
            );
        }
        SearchPhase::Loaded { movies } if movies.is_empty() => {
            draw_notice(frame, regions[1], "No movies found.", TEXT_MUTED);
        }
        SearchPhase::Loaded { movies } => {
            let items: Vec<ListItem> = movies
                .iter()
                .map(|movie| {
                    let mark = favorite_mark(app.is_favorite(&movie.imdb_id));
                    let line = Line::from(vec![
                        mark,
                        Span::styled(movie.title.clone(), Style::default().fg(TEXT)),
                        Span::styled(
                            format!("  ({})", movie.year),
                            Style::default().fg(TEXT_MUTED),
                        ),
                        Span::styled(
                            format!("  [{}]", movie.media_type),
                            Style::default().fg(TEXT_MUTED),
                        ),
                    ]);
                    ListItem::new(line)
                })
                .collect();

            let focused = state.focus == SearchField::Results;
            let list = List::new(items)
                .block(results_block(focused))
                .highlight_style(
                    Style::default()
                        .bg(ACTIVE_HIGHLIGHT)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol("▶ ");

            let mut list_state = ListState::default();
            list_state.select(Some(state.selected.min(movies.len().saturating_sub(1))));
            frame.render_stateful_widget(list, regions[1], &mut list_state);
        }
    }
}

fn draw_search_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let state = app.search();
    let type_label = match state.media_type {
        None => "all",
        Some(MediaType::Movie) => "movie",
        Some(MediaType::Series) => "series",
        Some(MediaType::Episode) => "episode",
    };

    let line = Line::from(vec![
        Span::styled(" 🔍 ", Style::default().fg(ACCENT)),
        field_span(&state.term, state.focus == SearchField::Term),
        Span::styled("  │  Year: ", Style::default().fg(TEXT_MUTED)),
        field_span(&state.year, state.focus == SearchField::Year),
        Span::styled("  │  Type: ", Style::default().fg(TEXT_MUTED)),
        Span::styled(type_label.to_string(), Style::default().fg(TEXT)),
    ]);

    frame.render_widget(
        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        ),
        area,
    );
}

fn draw_detail(frame: &mut Frame<'_>, app: &App, body: Rect) {
    let state = app.detail();

    if state.is_loading() {
        draw_notice(frame, body, "Fetching movie details...", TEXT_MUTED);
        return;
    }

    if let crate::ui::detail::DetailViewState::Failed { message } = state {
        let lines = vec![
            Line::from(Span::styled(
                message.clone(),
                Style::default().fg(STATUS_ERROR),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Press Esc to go back.",
                Style::default().fg(TEXT_MUTED),
            )),
        ];
        frame.render_widget(
            Paragraph::new(lines).block(bordered_block()),
            body,
        );
        return;
    }

    let Some(detail) = state.detail() else {
        return;
    };

    frame.render_widget(
        Paragraph::new(detail_lines(detail, app.is_favorite(&detail.imdb_id)))
            .wrap(Wrap { trim: true })
            .block(bordered_block()),
        body,
    );
}

fn detail_lines(detail: &MovieDetail, favorite: bool) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    lines.push(Line::from(vec![
        favorite_mark(favorite),
        Span::styled(
            detail.title.clone(),
            Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
        ),
    ]));

    let mut meta = vec![detail.year.clone()];
    for field in [&detail.rated, &detail.runtime, &detail.released] {
        if !field.is_empty() && field != "N/A" {
            meta.push(field.clone());
        }
    }
    lines.push(Line::from(Span::styled(
        meta.join("  ·  "),
        Style::default().fg(TEXT_MUTED),
    )));

    let genres = detail.genres();
    if !genres.is_empty() {
        lines.push(Line::from(Span::styled(
            genres.join(" / "),
            Style::default().fg(ACCENT),
        )));
    }

    if let Some(rating) = detail.rating() {
        let votes = detail
            .votes()
            .map(|votes| format!(" ({} votes)", votes))
            .unwrap_or_default();
        lines.push(Line::from(Span::styled(
            format!("IMDb {}{}", rating, votes),
            Style::default().fg(TEXT),
        )));
    }
    for rating in &detail.ratings {
        lines.push(Line::from(Span::styled(
            format!("{}: {}", rating.source, rating.value),
            Style::default().fg(TEXT_MUTED),
        )));
    }

    lines.push(Line::from(""));
    if !detail.plot.is_empty() && detail.plot != "N/A" {
        lines.push(Line::from(Span::styled(
            detail.plot.clone(),
            Style::default().fg(TEXT),
        )));
        lines.push(Line::from(""));
    }

    for (label, value) in [
        ("Director", &detail.director),
        ("Actors", &detail.actors),
        ("Language", &detail.language),
        ("Country", &detail.country),
        ("Awards", &detail.awards),
    ] {
        if !value.is_empty() && value != "N/A" {
            lines.push(Line::from(vec![
                Span::styled(format!("{}: ", label), Style::default().fg(TEXT_MUTED)),
                Span::styled(value.clone(), Style::default().fg(TEXT)),
            ]));
        }
    }

    lines
}

fn draw_favorites(frame: &mut Frame<'_>, app: &App, body: Rect) {
    let state = app.favorites_view();

    if state.is_loading() {
        draw_notice(frame, body, "Loading your favorites...", TEXT_MUTED);
        return;
    }

    let movies = state.movies();
    if movies.is_empty() {
        draw_notice(
            frame,
            body,
            "No favorite movies added. Browse titles and press Space to save them here.",
            TEXT_MUTED,
        );
        return;
    }

    let regions = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(body);

    let saved = if movies.len() == 1 {
        "1 title saved".to_string()
    } else {
        format!("{} titles saved", movies.len())
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(" ♥ {}", saved),
            Style::default().fg(FAVORITE),
        ))),
        regions[0],
    );

    let items: Vec<ListItem> = movies
        .iter()
        .map(|movie| {
            let mut spans = vec![
                favorite_mark(true),
                Span::styled(movie.title.clone(), Style::default().fg(TEXT)),
                Span::styled(
                    format!("  ({})", movie.year),
                    Style::default().fg(TEXT_MUTED),
                ),
            ];
            if let Some(rating) = movie.rating() {
                spans.push(Span::styled(
                    format!("  ★ {}", rating),
                    Style::default().fg(TEXT_MUTED),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(results_block(true))
        .highlight_style(
            Style::default()
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected.min(movies.len() - 1)));
    frame.render_stateful_widget(list, regions[1], &mut list_state);
}

fn draw_notice(frame: &mut Frame<'_>, area: Rect, message: &str, color: ratatui::style::Color) {
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(color),
        )))
        .wrap(Wrap { trim: true })
        .block(bordered_block()),
        area,
    );
}

fn favorite_mark(favorite: bool) -> Span<'static> {
    if favorite {
        Span::styled("♥ ", Style::default().fg(FAVORITE))
    } else {
        Span::styled("♡ ", Style::default().fg(TEXT_MUTED))
    }
}

fn bordered_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}

fn results_block(focused: bool) -> Block<'static> {
    let color = if focused { ACCENT } else { GLOBAL_BORDER };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
}

fn field_span(value: &str, focused: bool) -> Span<'static> {
    if focused {
        Span::styled(
            format!("{}█", value),
            Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(value.to_string(), Style::default().fg(TEXT))
    }
}
