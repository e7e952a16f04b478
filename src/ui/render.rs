use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use crate::api::Post;
use crate::ui::app::{App, Screen};
use crate::ui::compose::{ComposeField, ComposeState};
use crate::ui::feed::FeedState;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect, layout_regions, toast_rect};
use crate::ui::notify::ToastKind;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, LIKE_ACTIVE, MUTED_TEXT, POPUP_BORDER,
    STATUS_ERROR, STATUS_OK,
};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let header_widget = Header::new();
    frame.render_widget(
        header_widget.widget(&app.server_label(), app.is_authenticated()),
        header,
    );

    frame.render_widget(Clear, body);
    match app.screen().clone() {
        Screen::Feed => draw_feed(frame, body, app),
        Screen::Read { post_id } => draw_read(frame, body, app, &post_id),
        Screen::Compose => draw_compose(frame, body, app),
    }

    let footer_widget = Footer::new();
    frame.render_widget(footer_widget.widget(app.screen(), footer), footer);

    draw_toasts(frame, body, app);
}

fn bordered(title: &'static str) -> Block<'static> {
    Block::default()
        .title(Span::styled(title, Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}

// ---------------------------------------------------------------------------
// Feed
// ---------------------------------------------------------------------------

fn draw_feed(frame: &mut Frame<'_>, body: Rect, app: &App) {
    match app.feed() {
        FeedState::Idle | FeedState::Loading => {
            frame.render_widget(
                Paragraph::new("Loading feed…")
                    .style(Style::default().fg(MUTED_TEXT))
                    .block(bordered("Feed")),
                body,
            );
        }
        FeedState::Failed => {
            frame.render_widget(
                Paragraph::new("Could not load the feed. Press r to retry.")
                    .style(Style::default().fg(STATUS_ERROR))
                    .block(bordered("Feed")),
                body,
            );
        }
        FeedState::Ready { posts, selected } => {
            if posts.is_empty() {
                frame.render_widget(
                    Paragraph::new("No posts yet. Press n to write the first one.")
                        .style(Style::default().fg(MUTED_TEXT))
                        .block(bordered("Feed")),
                    body,
                );
                return;
            }

            let items: Vec<ListItem> = posts.iter().map(|post| card_item(post, app)).collect();
            let list = List::new(items)
                .block(bordered("Feed"))
                .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT));
            let mut state = ListState::default();
            state.select(Some(*selected));
            frame.render_stateful_widget(list, body, &mut state);
        }
    }
}

fn card_item(post: &Post, app: &App) -> ListItem<'static> {
    let liked = app.likes().liked(&post.id);
    let syncing = app
        .likes()
        .card(&post.id)
        .map(|card| card.in_flight.is_some())
        .unwrap_or(false);

    let like_span = if liked {
        Span::styled("♥ liked", Style::default().fg(LIKE_ACTIVE))
    } else {
        Span::styled("♡ like", Style::default().fg(MUTED_TEXT))
    };
    let mut meta_spans = vec![
        like_span,
        Span::styled(
            format!(
                "  ·  {}  ·  {} image",
                post.category,
                format_image_size(post.image_size_bytes())
            ),
            Style::default().fg(MUTED_TEXT),
        ),
    ];
    if syncing {
        meta_spans.push(Span::styled(
            "  (syncing)",
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM),
        ));
    }

    let lines = vec![
        Line::from(Span::styled(
            excerpt(&post.title, 50),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            excerpt(&post.content, 150),
            Style::default().fg(MUTED_TEXT),
        )),
        Line::from(Span::styled(
            format!("By {} on {}", post.author, post.publish_date),
            Style::default().fg(MUTED_TEXT),
        )),
        Line::from(meta_spans),
        Line::from(""),
    ];

    ListItem::new(Text::from(lines))
}

// ---------------------------------------------------------------------------
// Read screen
// ---------------------------------------------------------------------------

fn draw_read(frame: &mut Frame<'_>, body: Rect, app: &App, post_id: &str) {
    let Some(post) = app.feed().post(post_id) else {
        frame.render_widget(
            Paragraph::new("This post is no longer in the feed. Esc to go back.")
                .style(Style::default().fg(MUTED_TEXT))
                .block(bordered("Post")),
            body,
        );
        return;
    };

    let comment_height = 5.min(body.height);
    let post_area = Rect {
        height: body.height.saturating_sub(comment_height),
        ..body
    };
    let comment_area = Rect {
        y: body.y + body.height.saturating_sub(comment_height),
        height: comment_height,
        ..body
    };

    let liked = app.likes().liked(&post.id);
    let like_line = if liked {
        Line::from(Span::styled("♥ You like this post", Style::default().fg(LIKE_ACTIVE)))
    } else {
        Line::from(Span::styled("♡ Not liked yet", Style::default().fg(MUTED_TEXT)))
    };

    let mut lines = vec![
        Line::from(Span::styled(
            post.title.clone(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                "By {} on {}  ·  {}",
                post.author, post.publish_date, post.category
            ),
            Style::default().fg(MUTED_TEXT),
        )),
        like_line,
        Line::from(""),
    ];
    lines.extend(post.content.split('\n').map(|row| Line::from(row.to_string())));

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(bordered("Post")),
        post_area,
    );

    let comment = app.comment_form();
    let comment_text = if comment.text.is_empty() {
        Span::styled("Write a comment…", Style::default().fg(MUTED_TEXT))
    } else {
        Span::styled(comment.text.clone(), Style::default().fg(HEADER_TEXT))
    };
    frame.render_widget(
        Paragraph::new(Line::from(comment_text))
            .wrap(Wrap { trim: false })
            .block(bordered("Comment")),
        comment_area,
    );
}

// ---------------------------------------------------------------------------
// Compose
// ---------------------------------------------------------------------------

fn draw_compose(frame: &mut Frame<'_>, body: Rect, app: &App) {
    match app.compose() {
        ComposeState::LoginRequired => {
            let lines = vec![
                Line::from("You need to be logged in to create a blog post."),
                Line::from(""),
                Line::from("Run `inkpost login --token <TOKEN>` and try again."),
                Line::from(""),
                Line::from(Span::styled(
                    "Esc to go back",
                    Style::default().fg(MUTED_TEXT),
                )),
            ];
            let area = centered_rect(60, 40, body);
            frame.render_widget(Clear, area);
            frame.render_widget(
                Paragraph::new(lines).block(
                    Block::default()
                        .title(Span::styled("Login required", Style::default().fg(ACCENT)))
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(POPUP_BORDER)),
                ),
                area,
            );
        }
        ComposeState::Editing {
            title,
            content,
            image_path,
            focused,
            submitting,
            ..
        } => {
            let mut lines = Vec::new();
            push_field(&mut lines, "Title", title, *focused == ComposeField::Title);
            push_field(
                &mut lines,
                "Content",
                content,
                *focused == ComposeField::Content,
            );
            push_field(
                &mut lines,
                "Category",
                &format!("‹ {} ›", app.compose().category_name()),
                *focused == ComposeField::Category,
            );
            push_field(
                &mut lines,
                "Featured image",
                image_path,
                *focused == ComposeField::ImagePath,
            );
            if *submitting {
                lines.push(Line::from(Span::styled(
                    "Publishing…",
                    Style::default().fg(STATUS_OK),
                )));
            }

            frame.render_widget(
                Paragraph::new(lines)
                    .wrap(Wrap { trim: false })
                    .block(bordered("New post")),
                body,
            );
        }
        ComposeState::Hidden => {}
    }
}

fn push_field(lines: &mut Vec<Line<'static>>, label: &'static str, value: &str, focused: bool) {
    let label_style = if focused {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(MUTED_TEXT)
    };
    lines.push(Line::from(Span::styled(label, label_style)));

    let mut rows: Vec<&str> = value.split('\n').collect();
    if rows.is_empty() {
        rows.push("");
    }
    let last = rows.len() - 1;
    for (idx, row) in rows.into_iter().enumerate() {
        let mut spans = vec![Span::styled(
            row.to_string(),
            Style::default().fg(HEADER_TEXT),
        )];
        if focused && idx == last {
            spans.push(Span::styled("▏", Style::default().fg(ACCENT)));
        }
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(""));
}

// ---------------------------------------------------------------------------
// Toasts
// ---------------------------------------------------------------------------

fn draw_toasts(frame: &mut Frame<'_>, body: Rect, app: &App) {
    let notifications = app.notifications();
    if notifications.is_empty() || body.height < 3 {
        return;
    }

    let lines: Vec<Line> = notifications
        .iter()
        .map(|toast| {
            let (marker, color) = match toast.kind {
                ToastKind::Success => ("✓ ", STATUS_OK),
                ToastKind::Error => ("✗ ", STATUS_ERROR),
            };
            Line::from(vec![
                Span::styled(marker, Style::default().fg(color)),
                Span::styled(toast.message.clone(), Style::default().fg(HEADER_TEXT)),
            ])
        })
        .collect();

    let area = toast_rect(body, lines.len() as u16);
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(POPUP_BORDER)),
        ),
        area,
    );
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Card preview text: first `max_chars` characters on one line, with a
/// trailing ellipsis when cut, the way the web cards truncate.
fn excerpt(text: &str, max_chars: usize) -> String {
    let flat = text.replace('\n', " ");
    let mut out: String = flat.chars().take(max_chars).collect();
    if flat.chars().count() > max_chars {
        out.push_str("...");
    }
    out
}

fn format_image_size(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{bytes} B")
    }
}
