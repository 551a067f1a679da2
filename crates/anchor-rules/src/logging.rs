/// Append the logging standards section.
pub fn append_section(out: &mut String) {
    out.push_str("## Logging Standards\n\n");
    out.push_str("### How to Add Logs\n");
    out.push_str("Use the built-in logger, NOT console.log or print():\n\n");
    out.push_str(
        r#"```typescript
// TypeScript/JavaScript
import { logger } from '@/lib/logger';

// Correct usage
logger.info('User logged in', { userId: user.id });
logger.error('Payment failed', { orderId, error: error.message });
logger.debug('Cache hit', { key, ttl });

// INCORRECT - Do not use
console.log('User logged in');  // ❌
```

```python
# Python
from app.core.logger import get_logger

logger = get_logger(__name__)

# Correct usage
logger.info("User logged in", extra={"user_id": user.id})
logger.error("Payment failed", extra={"order_id": order_id, "error": str(e)})

# INCORRECT - Do not use
print("User logged in")  # ❌
```

"#,
    );
    out.push_str(
        "### Log Levels\n\
         - `DEBUG`: Development debugging info\n\
         - `INFO`: Normal business operations\n\
         - `WARNING`: Unexpected but non-critical issues\n\
         - `ERROR`: Errors requiring attention\n\n",
    );
    out.push_str(
        "### Where to Add Logs\n\
         1. **API endpoints**: Log request start and completion\n\
         2. **Database operations**: Log queries and errors\n\
         3. **External service calls**: Log requests and responses\n\
         4. **Authentication**: Log login/logout events\n\
         5. **Critical business logic**: Log state changes\n\n",
    );
}
