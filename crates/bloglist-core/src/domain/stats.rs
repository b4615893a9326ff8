//! Summary statistics over a list of posts.
//!
//! Every function accepts an empty slice and returns `0` or `None` for it.
//! Ties are resolved in favor of whichever candidate appears first in the
//! input, so results are deterministic for a given ordering.

use std::collections::HashMap;

use serde::Serialize;

use super::Post;

/// The most liked post, reduced to its public summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FavoritePost {
    pub title: String,
    pub author: Option<String>,
    pub likes: i64,
}

/// The author with the highest number of posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorPosts {
    pub author: Option<String>,
    pub posts: usize,
}

/// The author with the highest cumulative likes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorLikes {
    pub author: Option<String>,
    pub likes: i64,
}

/// All statistics for one collection, computed in a single call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogStatistics {
    pub total_likes: i64,
    pub favorite: Option<FavoritePost>,
    pub most_posts: Option<AuthorPosts>,
    pub most_likes: Option<AuthorLikes>,
}

impl BlogStatistics {
    pub fn from_posts(posts: &[Post]) -> Self {
        Self {
            total_likes: total_likes(posts),
            favorite: favorite_post(posts),
            most_posts: author_with_most_posts(posts),
            most_likes: author_with_most_likes(posts),
        }
    }
}

/// Sum of all likes, saturating at `i64::MAX`.
pub fn total_likes(posts: &[Post]) -> i64 {
    posts.iter().fold(0, |total, p| total.saturating_add(p.likes))
}

/// Post with the most likes. Posts with zero likes are candidates too.
pub fn favorite_post(posts: &[Post]) -> Option<FavoritePost> {
    // `max_by_key` keeps the last maximum; the first one must win.
    posts
        .iter()
        .reduce(|best, next| if next.likes > best.likes { next } else { best })
        .map(|p| FavoritePost {
            title: p.title.clone(),
            author: p.author.clone(),
            likes: p.likes,
        })
}

pub fn author_with_most_posts(posts: &[Post]) -> Option<AuthorPosts> {
    leader(tally_by_author(posts, |_| 1)).map(|(author, count)| AuthorPosts {
        author: author.map(str::to_string),
        posts: count as usize,
    })
}

pub fn author_with_most_likes(posts: &[Post]) -> Option<AuthorLikes> {
    leader(tally_by_author(posts, |p| p.likes)).map(|(author, likes)| AuthorLikes {
        author: author.map(str::to_string),
        likes,
    })
}

/// Sum `weight` per author, keeping authors in order of first appearance.
/// Posts without an author form their own group. Sums saturate at `i64::MAX`.
fn tally_by_author(posts: &[Post], weight: impl Fn(&Post) -> i64) -> Vec<(Option<&str>, i64)> {
    let mut index: HashMap<Option<&str>, usize> = HashMap::new();
    let mut groups: Vec<(Option<&str>, i64)> = Vec::new();

    for post in posts {
        let author = post.author.as_deref();
        match index.get(&author) {
            Some(&i) => groups[i].1 = groups[i].1.saturating_add(weight(post)),
            None => {
                index.insert(author, groups.len());
                groups.push((author, weight(post)));
            }
        }
    }

    groups
}

fn leader<'a>(groups: Vec<(Option<&'a str>, i64)>) -> Option<(Option<&'a str>, i64)> {
    groups
        .into_iter()
        .reduce(|best, next| if next.1 > best.1 { next } else { best })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PostContent;
    use uuid::Uuid;

    fn post(title: &str, author: Option<&str>, likes: i64) -> Post {
        Post::new(
            Uuid::new_v4(),
            PostContent {
                title: title.to_string(),
                author: author.map(str::to_string),
                url: format!("https://example.com/{title}"),
                likes,
            },
        )
    }

    fn blogs() -> Vec<Post> {
        vec![
            post("React patterns", Some("Michael Chan"), 7),
            post("Go To Statement Considered Harmful", Some("Edsger W. Dijkstra"), 5),
            post("Canonical string reduction", Some("Edsger W. Dijkstra"), 12),
            post("First class tests", Some("Robert C. Martin"), 10),
            post("TDD harms architecture", Some("Robert C. Martin"), 0),
            post("Type wars", Some("Robert C. Martin"), 2),
        ]
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(total_likes(&[]), 0);
        assert_eq!(favorite_post(&[]), None);
        assert_eq!(author_with_most_posts(&[]), None);
        assert_eq!(author_with_most_likes(&[]), None);
    }

    #[test]
    fn test_total_likes() {
        assert_eq!(total_likes(&blogs()), 36);
        assert_eq!(total_likes(&[post("only", Some("a"), 5)]), 5);
    }

    #[test]
    fn test_favorite_post() {
        let favorite = favorite_post(&blogs()).unwrap();

        assert_eq!(
            favorite,
            FavoritePost {
                title: "Canonical string reduction".to_string(),
                author: Some("Edsger W. Dijkstra".to_string()),
                likes: 12,
            }
        );
    }

    #[test]
    fn test_favorite_post_with_zero_likes() {
        let posts = vec![post("first", Some("a"), 0), post("second", Some("a"), 0)];

        let favorite = favorite_post(&posts).unwrap();

        assert_eq!(favorite.title, "first");
        assert_eq!(favorite.likes, 0);
    }

    #[test]
    fn test_favorite_post_tie_keeps_first() {
        let posts = vec![
            post("low", None, 1),
            post("first top", None, 9),
            post("second top", None, 9),
        ];

        assert_eq!(favorite_post(&posts).unwrap().title, "first top");
    }

    #[test]
    fn test_author_with_most_posts() {
        assert_eq!(
            author_with_most_posts(&blogs()),
            Some(AuthorPosts {
                author: Some("Robert C. Martin".to_string()),
                posts: 3,
            })
        );
    }

    #[test]
    fn test_author_with_most_likes() {
        assert_eq!(
            author_with_most_likes(&blogs()),
            Some(AuthorLikes {
                author: Some("Edsger W. Dijkstra".to_string()),
                likes: 17,
            })
        );
    }

    #[test]
    fn test_posts_without_author_are_grouped() {
        let posts = vec![
            post("a", None, 1),
            post("b", None, 1),
            post("c", Some("someone"), 1),
        ];

        let most = author_with_most_posts(&posts).unwrap();

        assert_eq!(most.author, None);
        assert_eq!(most.posts, 2);
    }

    #[test]
    fn test_tied_authors_return_a_tied_candidate() {
        let posts = vec![post("a", Some("x"), 3), post("b", Some("y"), 3)];

        let most = author_with_most_likes(&posts).unwrap();

        assert_eq!(most.likes, 3);
        assert!(matches!(most.author.as_deref(), Some("x") | Some("y")));
    }

    #[test]
    fn test_two_posts_scenario() {
        let posts = vec![
            post("testiblogi 1", Some("Mie edelleen"), 9),
            post("testiblogi 2", Some("Mie edelleen"), 0),
        ];

        let stats = BlogStatistics::from_posts(&posts);

        assert_eq!(stats.total_likes, 9);
        assert_eq!(stats.favorite.unwrap().likes, 9);
    }

    #[test]
    fn test_zero_likes_scenario() {
        let posts = vec![
            post("testiblogi 1", Some("Mie edelleen"), 0),
            post("testiblogi 2", Some("Mie edelleen"), 0),
        ];

        let stats = BlogStatistics::from_posts(&posts);

        assert!(stats.favorite.is_some());
        assert_eq!(
            stats.most_likes,
            Some(AuthorLikes {
                author: Some("Mie edelleen".to_string()),
                likes: 0,
            })
        );
    }

    #[test]
    fn test_huge_like_counts_saturate() {
        let posts = vec![
            post("viral", Some("Mie edelleen"), i64::MAX),
            post("also viral", Some("Mie edelleen"), i64::MAX),
        ];

        let stats = BlogStatistics::from_posts(&posts);

        assert_eq!(stats.total_likes, i64::MAX);
        assert_eq!(stats.favorite.unwrap().title, "viral");
        assert_eq!(
            stats.most_likes,
            Some(AuthorLikes {
                author: Some("Mie edelleen".to_string()),
                likes: i64::MAX,
            })
        );
        assert_eq!(stats.most_posts.unwrap().posts, 2);
    }
}
